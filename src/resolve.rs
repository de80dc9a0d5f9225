//! Ancestor chain resolution
//!
//! Walks a content item up to its disk image and emits the root-first path
//! the view synchronizer expands along. Ascension is best effort: a failed
//! parent lookup logs a warning and truncates the path at the deepest
//! ancestor that resolved, it never raises to the caller.

use crate::model::{Content, ContentModel};
use crate::types::ContentId;
use tracing::{debug, warn};

/// Next hop of an ascension step
enum Hop {
    /// Disk images terminate the walk
    Terminal,
    Up(ContentId),
}

/// Per-variant ascension rule.
///
/// Volume systems and file systems ascend without being emitted; root
/// directories and files ascend to their file system instead of a parent
/// directory; layout nodes follow their declared parent unconditionally.
fn parent_hop(content: &Content) -> Hop {
    match content {
        Content::Image(_) => Hop::Terminal,
        Content::VolumeSystem(vs) => Hop::Up(vs.parent),
        Content::Volume(v) => Hop::Up(v.parent),
        Content::FileSystem(fs) => Hop::Up(fs.parent),
        Content::Directory(d) => match d.parent_dir {
            Some(parent) => Hop::Up(parent),
            None => Hop::Up(d.file_system),
        },
        Content::File(f) => match f.parent_dir {
            Some(parent) => Hop::Up(parent),
            None => Hop::Up(f.file_system),
        },
        Content::LayoutFile(lf) => Hop::Up(lf.parent),
        Content::LayoutDirectory(ld) => Hop::Up(ld.parent),
    }
}

/// Resolve the root-first ancestor path of `item`.
///
/// The returned sequence always ends with `item` itself and, absent lookup
/// failures, starts with the disk image that owns it. Volume-system and
/// file-system layers are traversed but not emitted.
pub fn resolve_path(model: &dyn ContentModel, item: &Content) -> Vec<Content> {
    let mut chain = vec![item.clone()];
    let mut cursor = item.clone();

    loop {
        let parent_id = match parent_hop(&cursor) {
            Hop::Terminal => break,
            Hop::Up(id) => id,
        };
        let parent = match model.get(parent_id) {
            Ok(parent) => parent,
            Err(err) => {
                warn!(
                    child_id = cursor.id(),
                    parent_id,
                    error = %err,
                    "Couldn't resolve parent, truncating ancestor path"
                );
                break;
            }
        };
        if !parent.is_structural_layer() {
            chain.push(parent.clone());
        }
        cursor = parent;
    }

    chain.reverse();
    debug!(
        item_id = item.id(),
        depth = chain.len(),
        "Resolved ancestor path"
    );
    chain
}
