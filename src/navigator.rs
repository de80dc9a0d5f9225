//! Navigation Scheduling
//!
//! The single public entry point of the engine. A navigation request
//! resolves the ancestor path, then runs the two synchronization phases as
//! deferred tasks on the current thread's cooperative task queue. Phase 2
//! is gated on the population ticket Phase 1 took, so it observes the
//! result pane only after the repopulation its selection triggered has
//! settled.

use crate::model::{Content, ContentModel};
use crate::resolve::resolve_path;
use crate::sync::TreeSynchronizer;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// Fire-once notification that a navigation attempt has finished.
///
/// Resolves to `true` when a result row was selected and to `false` when
/// the attempt ended without a selection. Neither case is an error: an
/// incomplete navigation degrades the UI, it never fails the caller.
pub struct CompletionSignal {
    rx: oneshot::Receiver<()>,
}

impl CompletionSignal {
    pub async fn wait(self) -> bool {
        self.rx.await.is_ok()
    }
}

/// Schedules path resolution and the two synchronization phases
pub struct Navigator {
    model: Arc<dyn ContentModel>,
    synchronizer: TreeSynchronizer,
}

impl Navigator {
    pub fn new(model: Arc<dyn ContentModel>, synchronizer: TreeSynchronizer) -> Self {
        Self {
            model,
            synchronizer,
        }
    }

    /// Navigate both views to `item`.
    ///
    /// Returns immediately; all view effects happen in deferred tasks.
    /// Must be called from within the UI task queue (a current-thread
    /// `LocalSet`), which also runs the spawned phases.
    pub fn navigate_to_content(&self, item: &Content) -> CompletionSignal {
        let (done, rx) = oneshot::channel();
        let path = resolve_path(self.model.as_ref(), item);
        debug!(
            item_id = item.id(),
            depth = path.len(),
            "Scheduling navigation"
        );

        let sync = self.synchronizer.clone();
        let target = item.clone();
        tokio::task::spawn_local(async move {
            let outcome = sync.expand_along_path(&path);

            // Phase 2 runs as its own task, after the repopulation the
            // Phase-1 selection triggered has settled.
            tokio::task::spawn_local(async move {
                if let Some(ticket) = outcome.repopulation {
                    ticket.settled().await;
                }
                if sync.select_leaf(&target) {
                    let _ = done.send(());
                }
            });
        });

        CompletionSignal { rx }
    }
}
