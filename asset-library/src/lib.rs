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

//! Asset library. Keeps track of every asset file of a project, the import options attached
//! to them and performs reimport requests. See [`library::ProjectLibrary`] docs for more info.

#![warn(missing_docs)]

pub use asset_core as core;

pub mod entry;
pub mod event;
pub mod importer;
pub mod library;
pub mod mesh;
pub mod options;
pub mod resource;
pub mod texture;

pub use entry::{DirectoryEntry, FileEntry, LibraryEntry, LibraryEntryKind};
pub use event::{LibraryEvent, LibraryEventBroadcaster};
pub use importer::{AssetImporter, ImportersContainer, MeshImporter, TextureImporter};
pub use library::{AssetLibrary, LibraryError, ProjectLibrary};
pub use mesh::MeshImportOptions;
pub use options::{ImportOptions, ImportOptionsRef, OptionsError, UntypedImportOptions};
pub use resource::{Resource, ResourceType};
pub use texture::TextureImportOptions;
