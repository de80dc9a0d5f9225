//! Shared fixtures for the integration suites

use casetree::error::ModelError;
use casetree::model::{CaseBuilder, Content, ContentModel, MemoryContentModel};
use casetree::navigator::Navigator;
use casetree::sync::TreeSynchronizer;
use casetree::types::ContentId;
use casetree::view::{
    MemoryNavigationView, MemoryResultView, MemorySelectionController, NavigationView,
    ResultView, SelectionController,
};
use std::sync::Arc;

/// The hierarchy of the standard scenario: one image, one volume, a file
/// system with a root directory, a subdirectory, and a file
pub struct StandardCase {
    pub model: Arc<MemoryContentModel>,
    pub img: ContentId,
    pub vol: ContentId,
    pub root: ContentId,
    pub docs: ContentId,
    pub file: ContentId,
}

pub fn standard_case() -> StandardCase {
    let mut case = CaseBuilder::new();
    let img = case.image("img1.dd");
    let vs = case.volume_system(img);
    let vol = case.volume(vs, "vol1");
    let fs = case.file_system(vol);
    let root = case.root_directory(fs, "root");
    let docs = case.directory(fs, root, "docs");
    let file = case.file(fs, docs, "a.txt");
    StandardCase {
        model: Arc::new(case.build().unwrap()),
        img,
        vol,
        root,
        docs,
        file,
    }
}

/// Delegates to an inner model but refuses to look up one id, simulating
/// a broken parent link in the case database
pub struct FailingModel {
    pub inner: Arc<MemoryContentModel>,
    pub banned: ContentId,
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

/// Views, controller, and navigator wired over one model
pub struct ViewHarness {
    pub nav: Arc<MemoryNavigationView>,
    pub selection: Arc<MemorySelectionController>,
    pub results: Arc<MemoryResultView>,
    pub navigator: Navigator,
}

/// Harness whose navigation tree is rendered from the same model it
/// navigates
pub fn view_harness(model: Arc<MemoryContentModel>) -> ViewHarness {
    let tree = MemoryNavigationView::from_model(model.as_ref());
    view_harness_with_tree(model, tree)
}

/// Harness with an explicitly provided navigation tree, e.g. one rendered
/// from a stale model
pub fn view_harness_with_tree(
    model: Arc<dyn ContentModel>,
    tree: MemoryNavigationView,
) -> ViewHarness {
    let nav = Arc::new(tree);
    let results = Arc::new(MemoryResultView::new());
    let selection = Arc::new(MemorySelectionController::new(
        Arc::clone(&nav),
        Arc::clone(&model),
        Arc::clone(&results),
    ));
    let synchronizer = TreeSynchronizer::new(
        Arc::clone(&nav) as Arc<dyn NavigationView>,
        Arc::clone(&selection) as Arc<dyn SelectionController>,
        Arc::clone(&results) as Arc<dyn ResultView>,
    );
    let navigator = Navigator::new(model, synchronizer);
    ViewHarness {
        nav,
        selection,
        results,
        navigator,
    }
}
