//! Property-based tests for ancestor path resolution

use casetree::error::ModelError;
use casetree::model::{CaseBuilder, Content, ContentModel, MemoryContentModel};
use casetree::resolve::resolve_path;
use casetree::types::ContentId;
use proptest::prelude::*;

/// Delegates to an inner model but refuses to look up one id
struct FailingModel {
    inner: MemoryContentModel,
    banned: ContentId,
}

impl ContentModel for FailingModel {
    fn get(&self, id: ContentId) -> Result<Content, ModelError> {
        if id == self.banned {
            return Err(ModelError::NotFound(id));
        }
        self.inner.get(id)
    }

    fn children_of(&self, id: ContentId) -> Result<Vec<Content>, ModelError> {
        self.inner.children_of(id)
    }

    fn images(&self) -> Vec<Content> {
        self.inner.images()
    }
}

/// Build a chain hierarchy and return the model plus the ids the resolver
/// should emit, root-first, ending in the leaf file
fn chain_case(
    dirs: &[String],
    has_volume: bool,
) -> (MemoryContentModel, Vec<ContentId>) {
    let mut builder = CaseBuilder::new();
    let mut emitted = Vec::new();

    let img = builder.image("img.dd");
    emitted.push(img);

    let fs_parent = if has_volume {
        let vs = builder.volume_system(img);
        let vol = builder.volume(vs, "vol1");
        emitted.push(vol);
        vol
    } else {
        img
    };
    let fs = builder.file_system(fs_parent);

    let root = builder.root_directory(fs, "root");
    emitted.push(root);
    let mut dir = root;
    for name in dirs {
        dir = builder.directory(fs, dir, name);
        emitted.push(dir);
    }
    let leaf = builder.file(fs, dir, "leaf.bin");
    emitted.push(leaf);

    (builder.build().unwrap(), emitted)
}

#[test]
fn test_path_ends_with_target_and_starts_at_image() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-z]{1,8}", 0..6),
                any::<bool>(),
            ),
            |(dirs, has_volume)| {
                let (model, emitted) = chain_case(&dirs, has_volume);
                let leaf = model.get(*emitted.last().unwrap()).unwrap();

                let path = resolve_path(&model, &leaf);

                let ids: Vec<ContentId> = path.iter().map(Content::id).collect();
                assert_eq!(ids, emitted);
                assert!(matches!(path[0], Content::Image(_)));
                assert!(
                    path.iter().all(|c| !c.is_structural_layer()),
                    "structural layers never surface in the path"
                );
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_resolution_is_deterministic() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-z]{1,8}", 0..6),
                any::<bool>(),
            ),
            |(dirs, has_volume)| {
                let (model, emitted) = chain_case(&dirs, has_volume);
                let leaf = model.get(*emitted.last().unwrap()).unwrap();

                let first = resolve_path(&model, &leaf);
                let second = resolve_path(&model, &leaf);
                assert_eq!(first, second);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_truncation_keeps_exactly_the_resolved_suffix() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-z]{1,8}", 0..6),
                any::<bool>(),
                any::<prop::sample::Index>(),
            ),
            |(dirs, has_volume, ban_index)| {
                let (model, emitted) = chain_case(&dirs, has_volume);
                let leaf = model.get(*emitted.last().unwrap()).unwrap();

                // Ban any emitted ancestor (never the leaf itself): the
                // path must be exactly the elements below the banned one
                let banned_pos = ban_index.index(emitted.len() - 1);
                let failing = FailingModel {
                    inner: model,
                    banned: emitted[banned_pos],
                };

                let path = resolve_path(&failing, &leaf);
                let ids: Vec<ContentId> = path.iter().map(Content::id).collect();
                assert_eq!(ids, &emitted[banned_pos + 1..]);
                Ok(())
            },
        )
        .unwrap();
}
