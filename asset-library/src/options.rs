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

//! Resource import options common traits and shared option handles.

use crate::core::{append_extension, log::Log};
use ron::ser::PrettyConfig;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    any::{type_name, Any},
    cell::{Ref, RefCell, RefMut},
    fmt::{Debug, Display, Formatter},
    fs::File,
    path::Path,
    rc::Rc,
};

/// An error that may occur during saving or loading of import options.
#[derive(Debug)]
pub enum OptionsError {
    /// An i/o error has occurred.
    Io(std::io::Error),
    /// Unable to serialize import options.
    Serialize(ron::Error),
    /// Malformed options file.
    Deserialize(ron::error::SpannedError),
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::Io(v) => write!(f, "An i/o error has occurred: {v}"),
            OptionsError::Serialize(v) => write!(f, "Unable to serialize import options: {v}"),
            OptionsError::Deserialize(v) => write!(f, "Malformed import options: {v}"),
        }
    }
}

impl std::error::Error for OptionsError {}

impl From<std::io::Error> for OptionsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ron::Error> for OptionsError {
    fn from(e: ron::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<ron::error::SpannedError> for OptionsError {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::Deserialize(e)
    }
}

/// A trait for resource import options. It provides generic functionality shared over all types
/// of import options.
pub trait ImportOptions:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Debug + 'static
{
    /// Saves import options into a specified file.
    fn save(&self, path: &Path) -> Result<(), OptionsError> {
        let file = File::create(path)?;
        ron::ser::to_writer_pretty(file, self, PrettyConfig::default())?;
        Ok(())
    }

    /// Loads import options from a specified file.
    fn load(path: &Path) -> Result<Self, OptionsError> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }
}

/// Tries to load import settings for a resource from its `.options` file that lies next to
/// the resource. Returns `None` if there is no such file or it is malformed.
pub fn try_get_import_settings<T>(resource_path: &Path) -> Option<T>
where
    T: ImportOptions,
{
    let settings_path = append_extension(resource_path, "options");

    if !settings_path.exists() {
        return None;
    }

    match T::load(&settings_path) {
        Ok(options) => Some(options),
        Err(e) => {
            Log::warn(format!(
                "Malformed options file {} for {} resource, fallback to defaults! Reason: {}",
                settings_path.display(),
                resource_path.display(),
                e
            ));

            None
        }
    }
}

/// Shared, typed handle to a set of import options. Cloning the handle does **not** clone the
/// options, both handles point to the same instance. Use [`Self::ptr_eq`] to check identity.
pub struct ImportOptionsRef<T>(Rc<RefCell<T>>);

impl<T> Clone for ImportOptionsRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Debug> Debug for ImportOptionsRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImportOptionsRef({:?})", self.0.borrow())
    }
}

impl<T: ImportOptions> Default for ImportOptionsRef<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ImportOptions> ImportOptionsRef<T> {
    /// Wraps the options into a new shared instance.
    pub fn new(options: T) -> Self {
        Self(Rc::new(RefCell::new(options)))
    }

    /// Immutably borrows the options.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrows the options.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Converts the handle into untyped one. The instance stays the same.
    pub fn into_untyped(self) -> UntypedImportOptions {
        UntypedImportOptions(self.0)
    }
}

trait ErasedImportOptions: Any {
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;

    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;

    fn deep_clone(&self) -> Rc<dyn ErasedImportOptions>;

    fn content_eq(&self, other: &dyn ErasedImportOptions) -> bool;

    fn save(&self, path: &Path) -> Result<(), OptionsError>;

    fn debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result;
}

impl<T: ImportOptions> ErasedImportOptions for RefCell<T> {
    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn deep_clone(&self) -> Rc<dyn ErasedImportOptions> {
        Rc::new(RefCell::new(self.borrow().clone()))
    }

    fn content_eq(&self, other: &dyn ErasedImportOptions) -> bool {
        other
            .as_any()
            .downcast_ref::<RefCell<T>>()
            .is_some_and(|other| *other.borrow() == *self.borrow())
    }

    fn save(&self, path: &Path) -> Result<(), OptionsError> {
        self.borrow().save(path)
    }

    fn debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.borrow().fmt(f)
    }
}

/// Type-erased shared handle to a set of import options of any type. This is what the asset
/// library stores for every file entry. Use [`Self::try_cast`] to get a typed handle to the
/// same instance.
#[derive(Clone)]
pub struct UntypedImportOptions(Rc<dyn ErasedImportOptions>);

impl Debug for UntypedImportOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.debug(f)
    }
}

impl<T: ImportOptions> From<T> for UntypedImportOptions {
    fn from(options: T) -> Self {
        ImportOptionsRef::new(options).into_untyped()
    }
}

impl UntypedImportOptions {
    /// Tries to view the options as options of the given type. The returned handle points to
    /// the same instance. Returns `None` if the options are of some other type.
    pub fn try_cast<T: ImportOptions>(&self) -> Option<ImportOptionsRef<T>> {
        self.0
            .clone()
            .into_any()
            .downcast::<RefCell<T>>()
            .ok()
            .map(ImportOptionsRef)
    }

    /// Returns `true` if both handles point to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    /// Creates a new, separate instance with the same content.
    pub fn deep_clone(&self) -> Self {
        Self(self.0.deep_clone())
    }

    /// Returns `true` if both options have the same type and equal content.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.0.content_eq(&*other.0)
    }

    /// Returns the name of the actual options type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Saves the options into a specified file.
    pub fn save(&self, path: &Path) -> Result<(), OptionsError> {
        self.0.save(path)
    }
}
