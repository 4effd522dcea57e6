use std::collections::HashSet;

use crate::domain::entities::common::RelativePath;
use crate::domain::error::{DomainError, FieldViolation};

/// Files and directories a generator wants created under its target root.
///
/// Pure data: building one performs no I/O. The application layer
/// materialises it through the `Filesystem` port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStructure {
    entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: RelativePath, content: impl Into<String>) {
        self.entries.push(FsEntry::File(FileToWrite {
            path,
            content: content.into(),
            executable: false,
        }));
    }

    pub fn add_executable(&mut self, path: RelativePath, content: impl Into<String>) {
        self.entries.push(FsEntry::File(FileToWrite {
            path,
            content: content.into(),
            executable: true,
        }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    pub fn with_file(mut self, path: RelativePath, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    /// Append every entry of `other`, keeping order.
    pub fn extend(&mut self, other: ProjectStructure) {
        self.entries.extend(other.entries);
    }

    /// Reject duplicate paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let duplicates: Vec<_> = self
            .entries
            .iter()
            .map(FsEntry::path)
            .filter(|p| !seen.insert(*p))
            .map(|p| FieldViolation::new("structure", format!("duplicate path '{p}'")))
            .collect();

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ConfigValidation {
                violations: duplicates,
            })
        }
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
    pub executable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
