//! Content model boundary and in-memory implementation
//!
//! [`ContentModel`] is the query surface the navigation engine sees; how a
//! host actually stores case data is its own concern. The in-memory model
//! here backs the CLI host and the test suites.

use crate::error::ModelError;
use crate::model::content::{normalized_name, Content};
use crate::types::ContentId;
use std::collections::HashMap;

/// Query boundary over the case hierarchy.
///
/// Lookups may fail: a case database can hold broken parent links, and the
/// resolver is expected to degrade rather than abort when they do.
pub trait ContentModel {
    /// Look up a single content item
    fn get(&self, id: ContentId) -> Result<Content, ModelError>;

    /// Children of an item, in model order
    fn children_of(&self, id: ContentId) -> Result<Vec<Content>, ModelError>;

    /// Top-level evidence items (disk images)
    fn images(&self) -> Vec<Content>;
}

/// Immutable in-memory content model.
///
/// Children are ordered by insertion order of the source items.
#[derive(Debug)]
pub struct MemoryContentModel {
    contents: HashMap<ContentId, Content>,
    children: HashMap<ContentId, Vec<ContentId>>,
    images: Vec<ContentId>,
    order: Vec<ContentId>,
}

impl MemoryContentModel {
    /// Build a model from a flat list of content items.
    ///
    /// Validates that every declared parent link resolves; a case file with
    /// a dangling link is rejected here rather than surfacing later as a
    /// truncated path.
    pub fn from_contents(items: Vec<Content>) -> Result<Self, ModelError> {
        let mut contents = HashMap::with_capacity(items.len());
        let mut children: HashMap<ContentId, Vec<ContentId>> = HashMap::new();
        let mut images = Vec::new();
        let order: Vec<ContentId> = items.iter().map(Content::id).collect();

        for item in &items {
            contents.insert(item.id(), item.clone());
        }

        for item in &items {
            match item.structural_parent() {
                None => images.push(item.id()),
                Some(parent) => {
                    if !contents.contains_key(&parent) {
                        return Err(ModelError::DanglingParent {
                            child: item.id(),
                            parent,
                        });
                    }
                    children.entry(parent).or_default().push(item.id());
                }
            }
            if let Content::Directory(d) = item {
                if !contents.contains_key(&d.file_system) {
                    return Err(ModelError::DanglingParent {
                        child: d.id,
                        parent: d.file_system,
                    });
                }
            }
            if let Content::File(f) = item {
                if !contents.contains_key(&f.file_system) {
                    return Err(ModelError::DanglingParent {
                        child: f.id,
                        parent: f.file_system,
                    });
                }
            }
        }

        Ok(Self {
            contents,
            children,
            images,
            order,
        })
    }

    /// First item whose display name matches, in model order.
    ///
    /// Names are NFC-normalized on both sides, the same comparison the
    /// synchronizer applies.
    pub fn find_by_display_name(&self, name: &str) -> Option<Content> {
        let wanted = normalized_name(name);
        self.order
            .iter()
            .filter_map(|id| self.contents.get(id))
            .find(|content| normalized_name(&content.display_name()) == wanted)
            .cloned()
    }
}

impl ContentModel for MemoryContentModel {
    fn get(&self, id: ContentId) -> Result<Content, ModelError> {
        self.contents
            .get(&id)
            .cloned()
            .ok_or(ModelError::NotFound(id))
    }

    fn children_of(&self, id: ContentId) -> Result<Vec<Content>, ModelError> {
        if !self.contents.contains_key(&id) {
            return Err(ModelError::NotFound(id));
        }
        let ids = self.children.get(&id).map(Vec::as_slice).unwrap_or(&[]);
        ids.iter().map(|child| self.get(*child)).collect()
    }

    fn images(&self) -> Vec<Content> {
        self.images
            .iter()
            .filter_map(|id| self.contents.get(id).cloned())
            .collect()
    }
}
