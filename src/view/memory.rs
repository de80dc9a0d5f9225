//! In-memory view implementations
//!
//! A materialized navigation tree, selection controller, and result pane
//! over a [`ContentModel`]. These back the CLI host and the test suites; a
//! real browser supplies its own implementations of the view traits.

use crate::error::ViewError;
use crate::model::{normalized_name, Content, ContentModel};
use crate::types::{ContentId, NodeHandle, ResultHandle};
use crate::view::{
    NavigationView, PopulationTicket, ResultView, SelectionController, IMAGE_ROOT_NAME,
};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// Display name of the root context node
const CASE_ROOT_NAME: &str = "Case";

/// Children of `id` as the views present them.
///
/// Volume-system and file-system layers are flattened into their own
/// children, matching the levels the navigation tree actually renders.
pub fn presentation_children(model: &dyn ContentModel, id: ContentId) -> Vec<Content> {
    let children = match model.children_of(id) {
        Ok(children) => children,
        Err(err) => {
            debug!(parent_id = id, error = %err, "Couldn't list children");
            return Vec::new();
        }
    };
    let mut out = Vec::new();
    for child in children {
        if child.is_structural_layer() {
            out.extend(presentation_children(model, child.id()));
        } else {
            out.push(child);
        }
    }
    out
}

/// Identity the memory views generate for a displayed content item
fn generated_identity(content: &Content) -> String {
    format!("{}:{}", content.kind(), normalized_name(&content.display_name()))
}

struct NodeRecord {
    content: Option<ContentId>,
    name: String,
    children: Vec<NodeHandle>,
    expanded: bool,
}

/// Materialized navigation tree: root context → image collection → one
/// subtree per disk image, with structural layers flattened out.
pub struct MemoryNavigationView {
    nodes: RwLock<Vec<NodeRecord>>,
}

impl MemoryNavigationView {
    pub fn from_model(model: &dyn ContentModel) -> Self {
        let mut nodes = vec![
            NodeRecord {
                content: None,
                name: CASE_ROOT_NAME.to_string(),
                children: vec![1],
                expanded: true,
            },
            NodeRecord {
                content: None,
                name: IMAGE_ROOT_NAME.to_string(),
                children: Vec::new(),
                expanded: true,
            },
        ];
        for image in model.images() {
            Self::attach(&mut nodes, model, 1, &image);
        }
        Self {
            nodes: RwLock::new(nodes),
        }
    }

    fn attach(
        nodes: &mut Vec<NodeRecord>,
        model: &dyn ContentModel,
        parent: NodeHandle,
        content: &Content,
    ) {
        let handle = nodes.len();
        nodes.push(NodeRecord {
            content: Some(content.id()),
            name: content.display_name(),
            children: Vec::new(),
            expanded: false,
        });
        nodes[parent].children.push(handle);
        for child in presentation_children(model, content.id()) {
            Self::attach(nodes, model, handle, &child);
        }
    }

    /// Root context node
    pub fn root(&self) -> NodeHandle {
        0
    }

    /// Content the node displays, if any
    pub fn content_of(&self, node: NodeHandle) -> Option<ContentId> {
        self.nodes.read().get(node).and_then(|n| n.content)
    }

    pub fn is_expanded(&self, node: NodeHandle) -> bool {
        self.nodes.read().get(node).is_some_and(|n| n.expanded)
    }

    /// First node displaying the given content, in tree order
    pub fn node_for_content(&self, content: ContentId) -> Option<NodeHandle> {
        self.nodes
            .read()
            .iter()
            .position(|n| n.content == Some(content))
    }
}

impl NavigationView for MemoryNavigationView {
    fn children(&self, node: NodeHandle) -> Vec<NodeHandle> {
        self.nodes
            .read()
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn expand(&self, node: NodeHandle) {
        if let Some(record) = self.nodes.write().get_mut(node) {
            record.expanded = true;
        }
    }

    fn display_name(&self, node: NodeHandle) -> String {
        self.nodes
            .read()
            .get(node)
            .map(|n| n.name.clone())
            .unwrap_or_default()
    }
}

struct RowRecord {
    content: ContentId,
    identity: String,
}

/// Result pane whose rows are replaced by deferred repopulation tasks
#[derive(Default)]
pub struct MemoryResultView {
    rows: RwLock<Vec<RowRecord>>,
    selected: RwLock<Vec<ResultHandle>>,
    active: AtomicBool,
    waiters: Mutex<Vec<oneshot::Sender<()>>>,
}

impl MemoryResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows and resolve outstanding population tickets
    pub fn populate(&self, contents: &[Content]) {
        let records = contents
            .iter()
            .map(|c| RowRecord {
                content: c.id(),
                identity: generated_identity(c),
            })
            .collect::<Vec<_>>();
        debug!(rows = records.len(), "Result view repopulated");
        *self.rows.write() = records;
        self.selected.write().clear();
        for waiter in self.waiters.lock().drain(..) {
            let _ = waiter.send(());
        }
    }

    /// Currently selected rows
    pub fn selected(&self) -> Vec<ResultHandle> {
        self.selected.read().clone()
    }

    /// Content displayed by a row
    pub fn row_content(&self, row: ResultHandle) -> Option<ContentId> {
        self.rows.read().get(row).map(|r| r.content)
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl ResultView for MemoryResultView {
    fn root_children(&self) -> Vec<ResultHandle> {
        (0..self.rows.read().len()).collect()
    }

    fn node_identity(&self, row: ResultHandle) -> String {
        self.rows
            .read()
            .get(row)
            .map(|r| r.identity.clone())
            .unwrap_or_default()
    }

    fn identity_for(&self, content: &Content) -> String {
        generated_identity(content)
    }

    fn request_active(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    fn select(&self, rows: &[ResultHandle]) {
        *self.selected.write() = rows.to_vec();
    }

    fn subscribe_population(&self) -> PopulationTicket {
        let (tx, ticket) = PopulationTicket::pair();
        self.waiters.lock().push(tx);
        ticket
    }
}

/// Selection state of the navigation tree.
///
/// A successful selection defers a repopulation task onto the current
/// task queue, which refills the result pane with the presentation
/// children of the selected node and then resolves population tickets.
pub struct MemorySelectionController {
    nav: Arc<MemoryNavigationView>,
    model: Arc<dyn ContentModel>,
    results: Arc<MemoryResultView>,
    explored: RwLock<Option<NodeHandle>>,
    veto: AtomicBool,
}

impl MemorySelectionController {
    pub fn new(
        nav: Arc<MemoryNavigationView>,
        model: Arc<dyn ContentModel>,
        results: Arc<MemoryResultView>,
    ) -> Self {
        Self {
            nav,
            model,
            results,
            explored: RwLock::new(None),
            veto: AtomicBool::new(false),
        }
    }

    /// Make subsequent selection attempts fail, simulating a view in an
    /// invalid state
    pub fn set_veto(&self, veto: bool) {
        self.veto.store(veto, Ordering::Relaxed);
    }

    /// Currently explored node
    pub fn explored(&self) -> Option<NodeHandle> {
        *self.explored.read()
    }
}

impl SelectionController for MemorySelectionController {
    fn root_context(&self) -> NodeHandle {
        self.nav.root()
    }

    fn set_explored_context_and_selection(&self, node: NodeHandle) -> Result<(), ViewError> {
        if self.veto.load(Ordering::Relaxed) {
            return Err(ViewError::SelectionVetoed(
                "selection is disabled".to_string(),
            ));
        }
        let content = self
            .nav
            .content_of(node)
            .ok_or(ViewError::InvalidSelection(node))?;
        *self.explored.write() = Some(node);

        // Repopulation runs as its own queued task, after the current one.
        let model = Arc::clone(&self.model);
        let results = Arc::clone(&self.results);
        tokio::task::spawn_local(async move {
            let rows = presentation_children(model.as_ref(), content);
            results.populate(&rows);
        });
        Ok(())
    }
}
