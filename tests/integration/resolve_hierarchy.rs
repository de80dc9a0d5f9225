//! Path resolution over realistic case hierarchies

use super::test_utils::{standard_case, FailingModel};
use casetree::model::{CaseBuilder, Content, ContentModel};
use casetree::resolve::resolve_path;
use std::sync::Arc;

fn names(path: &[Content]) -> Vec<String> {
    path.iter().map(Content::display_name).collect()
}

#[test]
fn test_standard_scenario_path() {
    let case = standard_case();
    let target = case.model.get(case.file).unwrap();

    let path = resolve_path(case.model.as_ref(), &target);
    assert_eq!(names(&path), ["img1.dd", "vol1", "root", "docs", "a.txt"]);
}

#[test]
fn test_multi_volume_image_resolves_through_owning_volume() {
    let mut builder = CaseBuilder::new();
    let img = builder.image("server.E01");
    let vs = builder.volume_system(img);
    let vol1 = builder.volume(vs, "vol1");
    let vol2 = builder.volume(vs, "vol2");
    let fs1 = builder.file_system(vol1);
    let fs2 = builder.file_system(vol2);
    builder.root_directory(fs1, "/");
    let root2 = builder.root_directory(fs2, "/");
    let etc = builder.directory(fs2, root2, "etc");
    let passwd = builder.file(fs2, etc, "passwd");
    let model = builder.build().unwrap();

    let path = resolve_path(&model, &model.get(passwd).unwrap());
    assert_eq!(names(&path), ["server.E01", "vol2", "/", "etc", "passwd"]);
}

#[test]
fn test_deep_directory_chain() {
    let mut builder = CaseBuilder::new();
    let img = builder.image("deep.dd");
    let fs = builder.file_system(img);
    let mut dir = builder.root_directory(fs, "root");
    for depth in 0..64 {
        dir = builder.directory(fs, dir, &format!("d{depth}"));
    }
    let leaf = builder.file(fs, dir, "leaf.bin");
    let model = builder.build().unwrap();

    let path = resolve_path(&model, &model.get(leaf).unwrap());
    assert_eq!(path.len(), 67);
    assert_eq!(path[0].display_name(), "deep.dd");
    assert_eq!(path[66].display_name(), "leaf.bin");
}

#[test]
fn test_layout_directory_nested_under_volume() {
    let mut builder = CaseBuilder::new();
    let img = builder.image("img1.dd");
    let vs = builder.volume_system(img);
    let vol = builder.volume(vs, "vol1");
    let unalloc = builder.layout_directory(vol, "$Unalloc");
    let chunk = builder.layout_file(unalloc, "Unalloc_0_512");
    let model = builder.build().unwrap();

    let path = resolve_path(&model, &model.get(chunk).unwrap());
    assert_eq!(
        names(&path),
        ["img1.dd", "vol1", "$Unalloc", "Unalloc_0_512"]
    );
}

#[test]
fn test_truncated_path_stops_at_failure_point() {
    let case = standard_case();
    let failing = FailingModel {
        inner: Arc::clone(&case.model),
        banned: case.vol,
    };
    let target = case.model.get(case.file).unwrap();

    let path = resolve_path(&failing, &target);
    assert_eq!(names(&path), ["root", "docs", "a.txt"]);
}
