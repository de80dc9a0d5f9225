//! Fluent construction of case hierarchies
//!
//! Assembles the flat content list a [`MemoryContentModel`] is built from,
//! assigning ids in creation order. Link validation happens in
//! [`CaseBuilder::build`], so a malformed hierarchy fails once, at the end.

use crate::error::ModelError;
use crate::model::content::{
    Content, Directory, File, FileSystem, Image, LayoutDirectory, LayoutFile, Volume, VolumeSystem,
};
use crate::model::store::MemoryContentModel;
use crate::types::ContentId;

/// Builder for in-memory case hierarchies
#[derive(Default)]
pub struct CaseBuilder {
    items: Vec<Content>,
    next_id: ContentId,
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> ContentId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn image(&mut self, name: &str) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::Image(Image {
            id,
            name: name.to_string(),
        }));
        id
    }

    pub fn volume_system(&mut self, parent: ContentId) -> ContentId {
        let id = self.allocate();
        self.items
            .push(Content::VolumeSystem(VolumeSystem { id, parent }));
        id
    }

    pub fn volume(&mut self, parent: ContentId, name: &str) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::Volume(Volume {
            id,
            parent,
            name: name.to_string(),
        }));
        id
    }

    pub fn file_system(&mut self, parent: ContentId) -> ContentId {
        let id = self.allocate();
        self.items
            .push(Content::FileSystem(FileSystem { id, parent }));
        id
    }

    /// Root directory of a file system
    pub fn root_directory(&mut self, file_system: ContentId, name: &str) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::Directory(Directory {
            id,
            file_system,
            parent_dir: None,
            name: name.to_string(),
        }));
        id
    }

    pub fn directory(
        &mut self,
        file_system: ContentId,
        parent_dir: ContentId,
        name: &str,
    ) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::Directory(Directory {
            id,
            file_system,
            parent_dir: Some(parent_dir),
            name: name.to_string(),
        }));
        id
    }

    pub fn file(
        &mut self,
        file_system: ContentId,
        parent_dir: ContentId,
        name: &str,
    ) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::File(File {
            id,
            file_system,
            parent_dir: Some(parent_dir),
            name: name.to_string(),
        }));
        id
    }

    pub fn layout_file(&mut self, parent: ContentId, name: &str) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::LayoutFile(LayoutFile {
            id,
            parent,
            name: name.to_string(),
        }));
        id
    }

    pub fn layout_directory(&mut self, parent: ContentId, name: &str) -> ContentId {
        let id = self.allocate();
        self.items.push(Content::LayoutDirectory(LayoutDirectory {
            id,
            parent,
            name: name.to_string(),
        }));
        id
    }

    /// Validate links and produce the model
    pub fn build(self) -> Result<MemoryContentModel, ModelError> {
        MemoryContentModel::from_contents(self.items)
    }
}
