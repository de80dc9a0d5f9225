//! View Capabilities
//!
//! The two rendered surfaces the synchronizer drives, reduced to the
//! capabilities it actually needs. Hosts inject implementations; the
//! in-memory ones in [`memory`] back the CLI host and the test suites.

pub mod memory;

use crate::error::ViewError;
use crate::model::Content;
use crate::types::{NodeHandle, ResultHandle};
use tokio::sync::oneshot;

pub use memory::{MemoryNavigationView, MemoryResultView, MemorySelectionController};

/// Display name of the image-collection container under the root context.
///
/// Phase-1 expansion anchors at this node.
pub const IMAGE_ROOT_NAME: &str = "Images";

/// Navigation tree surface
pub trait NavigationView {
    /// Ordered children of a node
    fn children(&self, node: NodeHandle) -> Vec<NodeHandle>;

    /// Ask the view to expand a node
    fn expand(&self, node: NodeHandle);

    /// Name the view displays for a node
    fn display_name(&self, node: NodeHandle) -> String;
}

/// Explored-context and selection state of the navigation tree
pub trait SelectionController {
    /// Root node of the navigation tree
    fn root_context(&self) -> NodeHandle;

    /// Set the explored context and select `node`.
    ///
    /// Fails when the node is not a legal selection target; as a side
    /// effect of success, the result view repopulates asynchronously with
    /// the children of the selected node.
    fn set_explored_context_and_selection(&self, node: NodeHandle) -> Result<(), ViewError>;
}

/// Result pane surface
pub trait ResultView {
    /// Current rows, in view order
    fn root_children(&self) -> Vec<ResultHandle>;

    /// Identity the view assigned to an existing row
    fn node_identity(&self, row: ResultHandle) -> String;

    /// Identity the view would assign to a row displaying `content`.
    ///
    /// Phase 2 compares this against [`ResultView::node_identity`]; both
    /// sides must come from the same generation function.
    fn identity_for(&self, content: &Content) -> String;

    /// Ask the host to bring the result pane to front
    fn request_active(&self);

    /// Replace the current selection
    fn select(&self, rows: &[ResultHandle]);

    /// Ticket resolved when the view next finishes repopulating its rows.
    ///
    /// Taken before the selection that triggers repopulation, so the
    /// notification cannot be missed.
    fn subscribe_population(&self) -> PopulationTicket;
}

/// One-shot notification that a result-view repopulation has settled
pub struct PopulationTicket {
    rx: oneshot::Receiver<()>,
}

impl PopulationTicket {
    /// Create a ticket and the sender that resolves it
    pub fn pair() -> (oneshot::Sender<()>, PopulationTicket) {
        let (tx, rx) = oneshot::channel();
        (tx, PopulationTicket { rx })
    }

    /// Wait until the repopulation settles.
    ///
    /// A dropped sender also settles the ticket: the caller then proceeds
    /// against whatever rows currently exist instead of hanging.
    pub async fn settled(self) {
        let _ = self.rx.await;
    }
}
