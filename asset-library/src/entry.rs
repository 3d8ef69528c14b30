// Copyright (c) 2019-present Dmitry Stepanov and Fyrox Engine contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Library entries. Every file or directory tracked by a library has an entry.

use crate::{options::UntypedImportOptions, resource::Resource};
use std::path::{Path, PathBuf};

/// Kind of a library entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LibraryEntryKind {
    /// An asset file.
    File,
    /// A directory.
    Directory,
}

/// An asset file tracked by a library.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path of the file relative to the library root.
    pub path: PathBuf,
    /// Resource produced by the file.
    pub resource: Resource,
    /// Import options attached to the file. `None` if the file has never been imported with
    /// explicit options.
    pub options: Option<UntypedImportOptions>,
    /// How many times the file was reimported.
    pub import_count: u32,
}

/// A directory tracked by a library.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Path of the directory relative to the library root.
    pub path: PathBuf,
}

/// See module docs.
#[derive(Debug, Clone)]
pub enum LibraryEntry {
    /// An asset file.
    File(FileEntry),
    /// A directory.
    Directory(DirectoryEntry),
}

impl LibraryEntry {
    /// Returns kind of the entry.
    pub fn kind(&self) -> LibraryEntryKind {
        match self {
            LibraryEntry::File(_) => LibraryEntryKind::File,
            LibraryEntry::Directory(_) => LibraryEntryKind::Directory,
        }
    }

    /// Returns path of the entry.
    pub fn path(&self) -> &Path {
        match self {
            LibraryEntry::File(file) => &file.path,
            LibraryEntry::Directory(dir) => &dir.path,
        }
    }

    /// Returns the entry as file entry, if it is one.
    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            LibraryEntry::File(file) => Some(file),
            LibraryEntry::Directory(_) => None,
        }
    }

    /// Returns the entry as mutable file entry, if it is one.
    pub fn as_file_mut(&mut self) -> Option<&mut FileEntry> {
        match self {
            LibraryEntry::File(file) => Some(file),
            LibraryEntry::Directory(_) => None,
        }
    }
}
