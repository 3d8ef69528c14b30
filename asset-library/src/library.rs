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

//! Project library is a database of all asset files of a project. See [`ProjectLibrary`] docs
//! for more info.

use crate::{
    core::{
        append_extension,
        fxhash::{self, FxHashMap, FxHashSet},
        info,
        log::Log,
        Uuid,
    },
    entry::{DirectoryEntry, FileEntry, LibraryEntry},
    event::{LibraryEvent, LibraryEventBroadcaster, LibraryEventSender},
    importer::{AssetImporter, ImportersContainer},
    options::{OptionsError, UntypedImportOptions},
    resource::Resource,
};
use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// An error that may occur during library operations.
#[derive(Debug)]
pub enum LibraryError {
    /// An i/o error has occurred.
    Io(std::io::Error),
    /// Unable to save or load import options.
    Options(OptionsError),
    /// There is no entry at the given path.
    NotFound(PathBuf),
    /// The entry at the given path is not a file.
    NotAFile(PathBuf),
    /// There is no importer for the file at the given path.
    UnsupportedFormat(PathBuf),
    /// The resource is not tracked by the library.
    UnknownResource(Resource),
    /// Import options are of a different type than the importer of the file expects.
    OptionsMismatch {
        /// Options type expected by the importer.
        expected: &'static str,
        /// Options type that was passed.
        actual: &'static str,
    },
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::Io(v) => write!(f, "An i/o error has occurred: {v}"),
            LibraryError::Options(v) => write!(f, "{v}"),
            LibraryError::NotFound(v) => write!(f, "There is no library entry at {}", v.display()),
            LibraryError::NotAFile(v) => write!(f, "Library entry {} is not a file", v.display()),
            LibraryError::UnsupportedFormat(v) => {
                write!(f, "There is no importer for {}", v.display())
            }
            LibraryError::UnknownResource(v) => write!(f, "{v} is not tracked by the library"),
            LibraryError::OptionsMismatch { expected, actual } => {
                write!(f, "Expected {expected} import options, got {actual}")
            }
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<OptionsError> for LibraryError {
    fn from(e: OptionsError) -> Self {
        Self::Options(e)
    }
}

/// The part of a library that inspectors and other editor tools rely on.
pub trait AssetLibrary {
    /// Returns an entry at the given path (relative to the library root), if any.
    fn entry(&self, path: &Path) -> Option<&LibraryEntry>;

    /// Returns the path of the given resource, if the resource is tracked by the library.
    fn path_of(&self, resource: &Resource) -> Option<PathBuf>;

    /// Reimports the file at the given path using the given import options. If `force` is
    /// `false` and the options are equal to the options already stored in the entry, nothing
    /// happens.
    fn reimport(
        &mut self,
        path: &Path,
        options: UntypedImportOptions,
        force: bool,
    ) -> Result<(), LibraryError>;
}

/// Project library keeps a `path -> entry` mapping for every asset file (and directory) of a
/// project and a `uuid -> path` mapping for every resource produced by the files.
///
/// A library could either be in-memory (see [`Self::new`]) or rooted at a directory (see
/// [`Self::open`]). A rooted library is able to discover files on disk (see [`Self::scan`]) and
/// persists import options in `.options` files next to the asset files when they are reimported.
///
/// All paths passed to and returned from the library are relative to its root.
pub struct ProjectLibrary {
    root: Option<PathBuf>,
    entries: FxHashMap<PathBuf, LibraryEntry>,
    registry: FxHashMap<Uuid, PathBuf>,
    importers: ImportersContainer,
    event_broadcaster: LibraryEventBroadcaster,
}

impl Default for ProjectLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLibrary {
    /// Creates new in-memory library with default importers.
    pub fn new() -> Self {
        Self {
            root: None,
            entries: Default::default(),
            registry: Default::default(),
            importers: Default::default(),
            event_broadcaster: Default::default(),
        }
    }

    /// Creates new library rooted at the given directory without scanning it.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: Some(root.as_ref().to_owned()),
            ..Self::new()
        }
    }

    /// Opens a library rooted at the given directory and scans it. See [`Self::scan`].
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, LibraryError> {
        let mut library = Self::with_root(root);
        library.scan()?;
        Ok(library)
    }

    /// Returns a reference to the importers container.
    pub fn importers(&self) -> &ImportersContainer {
        &self.importers
    }

    /// Adds a subscriber that will receive every library event.
    pub fn subscribe(&mut self, sender: LibraryEventSender) {
        self.event_broadcaster.add(sender);
    }

    /// Returns an iterator over all entries of the library.
    pub fn entries(&self) -> impl Iterator<Item = &LibraryEntry> {
        self.entries.values()
    }

    /// Returns total amount of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the library has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a resource produced by the file at the given path.
    pub fn resource_of(&self, path: &Path) -> Option<Resource> {
        self.entries
            .get(path)
            .and_then(|entry| entry.as_file())
            .map(|file| file.resource)
    }

    /// Adds a file entry with optional import options and returns the resource of the file. If
    /// there is a file entry at the path already, its options are replaced and its resource is
    /// returned.
    pub fn add_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: Option<UntypedImportOptions>,
    ) -> Result<Resource, LibraryError> {
        let path = path.as_ref();

        if let Some(entry) = self.entries.get_mut(path) {
            let file = entry
                .as_file_mut()
                .ok_or_else(|| LibraryError::NotAFile(path.to_owned()))?;
            file.options = options;
            let resource = file.resource;
            self.event_broadcaster
                .broadcast(LibraryEvent::OptionsChanged(path.to_owned()));
            return Ok(resource);
        }

        let importer = self
            .importers
            .find_for_path(path)
            .ok_or_else(|| LibraryError::UnsupportedFormat(path.to_owned()))?;
        let resource = Resource::new(importer.resource_type());

        self.entries.insert(
            path.to_owned(),
            LibraryEntry::File(FileEntry {
                path: path.to_owned(),
                resource,
                options,
                import_count: 0,
            }),
        );
        self.registry.insert(resource.uuid(), path.to_owned());
        self.event_broadcaster
            .broadcast(LibraryEvent::Added(path.to_owned()));

        Ok(resource)
    }

    /// Adds a directory entry. Does nothing if there is an entry at the path already.
    pub fn add_directory<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();

        if !self.entries.contains_key(path) {
            self.entries.insert(
                path.to_owned(),
                LibraryEntry::Directory(DirectoryEntry {
                    path: path.to_owned(),
                }),
            );
            self.event_broadcaster
                .broadcast(LibraryEvent::Added(path.to_owned()));
        }
    }

    /// Removes an entry at the given path. The options of the entry are dropped from the library,
    /// but any outstanding handles to them stay valid.
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) -> Option<LibraryEntry> {
        let path = path.as_ref();
        let entry = self.entries.remove(path)?;

        if let LibraryEntry::File(file) = &entry {
            self.registry.remove(&file.resource.uuid());
        }

        self.event_broadcaster
            .broadcast(LibraryEvent::Removed(path.to_owned()));

        Some(entry)
    }

    /// Replaces import options of a file entry with the given instance.
    pub fn set_options<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: Option<UntypedImportOptions>,
    ) -> Result<(), LibraryError> {
        let path = path.as_ref();
        let file = self.file_entry_mut(path)?;
        file.options = options;
        self.event_broadcaster
            .broadcast(LibraryEvent::OptionsChanged(path.to_owned()));
        Ok(())
    }

    fn file_entry_mut(&mut self, path: &Path) -> Result<&mut FileEntry, LibraryError> {
        self.entries
            .get_mut(path)
            .ok_or_else(|| LibraryError::NotFound(path.to_owned()))?
            .as_file_mut()
            .ok_or_else(|| LibraryError::NotAFile(path.to_owned()))
    }

    /// Walks the root directory and synchronizes the entries with the files on disk: supported
    /// files and directories that are not in the library yet are added (with import options
    /// loaded from their `.options` files, if any), entries whose files were deleted are
    /// removed. Returns amount of added entries. In-memory libraries are left untouched.
    pub fn scan(&mut self) -> Result<usize, LibraryError> {
        let Some(root) = self.root.clone() else {
            return Ok(0);
        };

        if !root.is_dir() {
            return Err(LibraryError::NotFound(root));
        }

        let mut found = FxHashSet::default();
        let mut added = 0;

        for dir_entry in WalkDir::new(&root).min_depth(1) {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    // Unreadable entries are reported on every scan, warn about each only once.
                    Log::warn_once(
                        fxhash::hash(&e.path()),
                        format!("Unable to read library entry. Reason: {e}"),
                    );
                    continue;
                }
            };

            let Ok(relative) = dir_entry.path().strip_prefix(&root) else {
                continue;
            };
            let relative = relative.to_owned();

            if dir_entry.file_type().is_dir() {
                if !self.entries.contains_key(&relative) {
                    self.add_directory(&relative);
                    added += 1;
                }
                found.insert(relative);
            } else if let Some(importer) = self.importers.find_for_path(&relative) {
                if !self.entries.contains_key(&relative) {
                    let options = importer.try_load_import_settings(dir_entry.path());
                    self.add_file(&relative, options)?;
                    added += 1;
                }
                found.insert(relative);
            }
        }

        let vanished = self
            .entries()
            .map(LibraryEntry::path)
            .filter(|path| !found.contains(*path))
            .map(Path::to_path_buf)
            .collect::<Vec<_>>();
        for path in vanished.iter() {
            self.remove(path);
        }

        info!(
            "Library at {} was scanned: {} entries added, {} removed.",
            root.display(),
            added,
            vanished.len()
        );

        Ok(added)
    }
}

impl AssetLibrary for ProjectLibrary {
    fn entry(&self, path: &Path) -> Option<&LibraryEntry> {
        self.entries.get(path)
    }

    fn path_of(&self, resource: &Resource) -> Option<PathBuf> {
        self.registry.get(&resource.uuid()).cloned()
    }

    fn reimport(
        &mut self,
        path: &Path,
        options: UntypedImportOptions,
        force: bool,
    ) -> Result<(), LibraryError> {
        self.file_entry_mut(path)?;

        let expected = self
            .importers
            .find_for_path(path)
            .ok_or_else(|| LibraryError::UnsupportedFormat(path.to_owned()))?
            .default_import_options();
        if expected.type_name() != options.type_name() {
            return Err(LibraryError::OptionsMismatch {
                expected: expected.type_name(),
                actual: options.type_name(),
            });
        }

        let root = self.root.clone();
        let file = self.file_entry_mut(path)?;

        if !force
            && file
                .options
                .as_ref()
                .is_some_and(|stored| stored.content_eq(&options))
        {
            Log::info(format!(
                "Import options of {} did not change, reimport skipped.",
                path.display()
            ));
            return Ok(());
        }

        // The library owns its record, so an instance coming from outside is copied.
        let stored = match file.options.as_ref() {
            Some(stored) if stored.ptr_eq(&options) => options,
            _ => options.deep_clone(),
        };

        if let Some(root) = root {
            stored.save(&append_extension(root.join(path), "options"))?;
        }

        file.options = Some(stored);
        file.import_count += 1;

        Log::info(format!("{} was reimported.", path.display()));

        self.event_broadcaster.broadcast(LibraryEvent::Reimported {
            path: path.to_owned(),
            forced: force,
        });

        Ok(())
    }
}
