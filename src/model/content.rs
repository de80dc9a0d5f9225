//! Content variants and display-name handling
//!
//! A closed sum type over the entities a case hierarchy contains. Every
//! variant knows its structural parent link; directories and files
//! additionally distinguish root-of-filesystem entries, which ascend to
//! their file system rather than to a parent directory.

use crate::types::ContentId;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Disk image, the terminal ancestor of every hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ContentId,
    pub name: String,
}

/// Partition table layer between an image and its volumes.
///
/// Never surfaces in emitted paths or rendered trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSystem {
    pub id: ContentId,
    pub parent: ContentId,
}

/// Partition within a volume system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: ContentId,
    pub parent: ContentId,
    pub name: String,
}

/// File system layer inside a volume (or directly inside an image).
///
/// Like [`VolumeSystem`], a structural layer that never surfaces in
/// emitted paths or rendered trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystem {
    pub id: ContentId,
    pub parent: ContentId,
}

/// Directory inside a file system.
///
/// `parent_dir == None` marks the root directory of its file system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub id: ContentId,
    pub file_system: ContentId,
    #[serde(default)]
    pub parent_dir: Option<ContentId>,
    pub name: String,
}

impl Directory {
    pub fn is_root(&self) -> bool {
        self.parent_dir.is_none()
    }
}

/// File inside a file system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: ContentId,
    pub file_system: ContentId,
    #[serde(default)]
    pub parent_dir: Option<ContentId>,
    pub name: String,
}

impl File {
    pub fn is_root(&self) -> bool {
        self.parent_dir.is_none()
    }
}

/// Synthesized file covering carved or unallocated space.
///
/// Its parent is declared outright and may be any variant, including
/// another layout node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub id: ContentId,
    pub parent: ContentId,
    pub name: String,
}

/// Synthesized directory grouping layout files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDirectory {
    pub id: ContentId,
    pub parent: ContentId,
    pub name: String,
}

/// A content item in the case hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Image(Image),
    VolumeSystem(VolumeSystem),
    Volume(Volume),
    FileSystem(FileSystem),
    Directory(Directory),
    File(File),
    LayoutFile(LayoutFile),
    LayoutDirectory(LayoutDirectory),
}

impl Content {
    pub fn id(&self) -> ContentId {
        match self {
            Content::Image(c) => c.id,
            Content::VolumeSystem(c) => c.id,
            Content::Volume(c) => c.id,
            Content::FileSystem(c) => c.id,
            Content::Directory(c) => c.id,
            Content::File(c) => c.id,
            Content::LayoutFile(c) => c.id,
            Content::LayoutDirectory(c) => c.id,
        }
    }

    /// Variant label used in logs and generated node identities
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Image(_) => "image",
            Content::VolumeSystem(_) => "volume_system",
            Content::Volume(_) => "volume",
            Content::FileSystem(_) => "file_system",
            Content::Directory(_) => "directory",
            Content::File(_) => "file",
            Content::LayoutFile(_) => "layout_file",
            Content::LayoutDirectory(_) => "layout_directory",
        }
    }

    /// Name the views display for this item.
    ///
    /// Volume systems and file systems carry fixed labels; they are never
    /// rendered as tree levels, so the labels only appear in logs.
    pub fn display_name(&self) -> String {
        match self {
            Content::Image(c) => c.name.clone(),
            Content::VolumeSystem(_) => "Volume System".to_string(),
            Content::Volume(c) => c.name.clone(),
            Content::FileSystem(_) => "File System".to_string(),
            Content::Directory(c) => c.name.clone(),
            Content::File(c) => c.name.clone(),
            Content::LayoutFile(c) => c.name.clone(),
            Content::LayoutDirectory(c) => c.name.clone(),
        }
    }

    /// Parent link used to index children, independent of ascension rules.
    ///
    /// For root directories and files this is their file system, otherwise
    /// the parent directory.
    pub fn structural_parent(&self) -> Option<ContentId> {
        match self {
            Content::Image(_) => None,
            Content::VolumeSystem(c) => Some(c.parent),
            Content::Volume(c) => Some(c.parent),
            Content::FileSystem(c) => Some(c.parent),
            Content::Directory(c) => Some(c.parent_dir.unwrap_or(c.file_system)),
            Content::File(c) => Some(c.parent_dir.unwrap_or(c.file_system)),
            Content::LayoutFile(c) => Some(c.parent),
            Content::LayoutDirectory(c) => Some(c.parent),
        }
    }

    /// Structural layers are skipped when rendering trees and emitting paths
    pub fn is_structural_layer(&self) -> bool {
        matches!(self, Content::VolumeSystem(_) | Content::FileSystem(_))
    }
}

/// Normalize a display name for comparison.
///
/// Names arriving from different sources (case files, view node factories)
/// may differ in Unicode composition; NFC normalization makes equality
/// checks stable.
pub fn normalized_name(name: &str) -> String {
    name.nfc().collect()
}
