//! Two-Phase View Synchronization
//!
//! Phase 1 walks the navigation tree along a resolved ancestor path,
//! expanding matched levels and selecting the deepest match. Phase 2 finds
//! the target item among the result pane's rows and selects it. The result
//! pane only repopulates as a side effect of the Phase-1 selection, so
//! Phase 2 runs against rows that did not exist when Phase 1 started.

use crate::model::{normalized_name, Content};
use crate::types::NodeHandle;
use crate::view::{
    NavigationView, PopulationTicket, ResultView, SelectionController, IMAGE_ROOT_NAME,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// What Phase 1 produced
pub struct ExpansionOutcome {
    /// Deepest matched and selected node, if any level matched
    pub selected: Option<NodeHandle>,
    /// Ticket for the repopulation triggered by a successful selection
    pub repopulation: Option<PopulationTicket>,
}

/// Drives both synchronization phases over injected view handles
#[derive(Clone)]
pub struct TreeSynchronizer {
    nav: Arc<dyn NavigationView>,
    selection: Arc<dyn SelectionController>,
    results: Arc<dyn ResultView>,
}

impl TreeSynchronizer {
    pub fn new(
        nav: Arc<dyn NavigationView>,
        selection: Arc<dyn SelectionController>,
        results: Arc<dyn ResultView>,
    ) -> Self {
        Self {
            nav,
            selection,
            results,
        }
    }

    /// Phase 1: expand the navigation tree along `path` and select the
    /// deepest matched node.
    ///
    /// Matching starts at the image-collection anchor and walks every path
    /// element except the final leaf, comparing display names; the first
    /// child with a matching name wins at each level, and the first level
    /// without a match ends the walk. An unmatched level or a failed
    /// selection is not an error, just an incomplete expansion.
    pub fn expand_along_path(&self, path: &[Content]) -> ExpansionOutcome {
        let mut outcome = ExpansionOutcome {
            selected: None,
            repopulation: None,
        };
        let Some(anchor) = self.image_collection_anchor() else {
            debug!("Navigation tree has no image-collection anchor");
            return outcome;
        };

        let mut level = self.nav.children(anchor);
        let mut explored: Option<NodeHandle> = None;
        for element in path.iter().take(path.len().saturating_sub(1)) {
            let wanted = normalized_name(&element.display_name());
            let matched = level
                .iter()
                .copied()
                .find(|node| normalized_name(&self.nav.display_name(*node)) == wanted);
            // No child at this level carries the expected name: keep the
            // prefix expanded so far and stop matching.
            let Some(node) = matched else { break };
            self.nav.expand(node);
            explored = Some(node);
            level = self.nav.children(node);
        }

        if let Some(node) = explored {
            self.nav.expand(node);
            // Subscribe before selecting: repopulation is triggered by the
            // selection and must not be able to fire unobserved.
            let ticket = self.results.subscribe_population();
            match self.selection.set_explored_context_and_selection(node) {
                Ok(()) => outcome.repopulation = Some(ticket),
                Err(err) => {
                    warn!(node, error = %err, "Couldn't set selected node");
                }
            }
            outcome.selected = Some(node);
        }
        outcome
    }

    /// Phase 2: select the row displaying `target` in the result pane.
    ///
    /// Returns whether a row was selected. Exhausting the rows without a
    /// match is a valid terminal state, not an error.
    pub fn select_leaf(&self, target: &Content) -> bool {
        let wanted = self.results.identity_for(target);
        for row in self.results.root_children() {
            if self.results.node_identity(row) == wanted {
                self.results.request_active();
                self.results.select(&[row]);
                return true;
            }
        }
        debug!(item_id = target.id(), "Target not present in result view");
        false
    }

    /// Locate the image-collection container under the root context
    fn image_collection_anchor(&self) -> Option<NodeHandle> {
        let root = self.selection.root_context();
        let wanted = normalized_name(IMAGE_ROOT_NAME);
        self.nav
            .children(root)
            .into_iter()
            .find(|node| normalized_name(&self.nav.display_name(*node)) == wanted)
    }
}
