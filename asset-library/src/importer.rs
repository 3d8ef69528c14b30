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

//! Asset importers. An importer knows which files it can import, what type of resource it
//! produces and which import options it uses.

use crate::{
    core::lowercase_extension,
    mesh::MeshImportOptions,
    options::{try_get_import_settings, UntypedImportOptions},
    resource::ResourceType,
    texture::TextureImportOptions,
};
use std::{any::Any, path::Path};

/// Trait for asset importers.
pub trait AssetImporter: 'static {
    /// Returns a list of file extensions supported by the importer. The library uses this list
    /// to pick the correct importer for a file.
    fn extensions(&self) -> &[&str];

    /// Returns the type of resources produced by the importer.
    fn resource_type(&self) -> ResourceType;

    /// Returns `self` as `&dyn Any`. It is useful for downcasting to a particular type.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as `&mut dyn Any`. It is useful for downcasting to a particular type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Creates a new instance of default import options of the importer.
    fn default_import_options(&self) -> UntypedImportOptions;

    /// Tries to load import options stored next to the resource file.
    fn try_load_import_settings(&self, resource_path: &Path) -> Option<UntypedImportOptions>;

    /// Checks if the importer supports the given extension (case-insensitive).
    fn supports_extension(&self, ext: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Importer for mesh (model) files.
#[derive(Default)]
pub struct MeshImporter;

impl AssetImporter for MeshImporter {
    fn extensions(&self) -> &[&str] {
        &["fbx", "gltf", "glb", "obj", "dae"]
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Mesh
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn default_import_options(&self) -> UntypedImportOptions {
        MeshImportOptions::default().into()
    }

    fn try_load_import_settings(&self, resource_path: &Path) -> Option<UntypedImportOptions> {
        try_get_import_settings::<MeshImportOptions>(resource_path).map(Into::into)
    }
}

/// Importer for image files.
#[derive(Default)]
pub struct TextureImporter;

impl AssetImporter for TextureImporter {
    fn extensions(&self) -> &[&str] {
        &["png", "jpg", "jpeg", "tga", "bmp", "dds"]
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Texture
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn default_import_options(&self) -> UntypedImportOptions {
        TextureImportOptions::default().into()
    }

    fn try_load_import_settings(&self, resource_path: &Path) -> Option<UntypedImportOptions> {
        try_get_import_settings::<TextureImportOptions>(resource_path).map(Into::into)
    }
}

/// Container for asset importers.
pub struct ImportersContainer {
    importers: Vec<Box<dyn AssetImporter>>,
}

impl Default for ImportersContainer {
    fn default() -> Self {
        let mut container = Self::empty();
        container.set(MeshImporter);
        container.set(TextureImporter);
        container
    }
}

impl ImportersContainer {
    /// Creates a container without any importers.
    pub fn empty() -> Self {
        Self {
            importers: Vec::new(),
        }
    }

    /// Adds new importer or replaces existing. There could be only one importer of a given type
    /// at the same time.
    pub fn set<T>(&mut self, importer: T) -> Option<T>
    where
        T: AssetImporter,
    {
        if let Some(existing) = self
            .importers
            .iter_mut()
            .find_map(|i| (**i).as_any_mut().downcast_mut::<T>())
        {
            Some(std::mem::replace(existing, importer))
        } else {
            self.importers.push(Box::new(importer));
            None
        }
    }

    /// Tries to find an importer that is able to import the file at the given path.
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn AssetImporter> {
        let extension = lowercase_extension(path)?;
        self.importers
            .iter()
            .find(|i| i.supports_extension(&extension))
            .map(|i| &**i)
    }

    /// Returns total amount of importers in the container.
    pub fn len(&self) -> usize {
        self.importers.len()
    }

    /// Returns `true` if there are no importers.
    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn importers_container_set_replaces_same_type() {
        let mut container = ImportersContainer::empty();
        assert!(container.set(MeshImporter).is_none());
        assert!(container.set(MeshImporter).is_some());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn find_importer_by_extension() {
        let container = ImportersContainer::default();

        let importer = container.find_for_path(Path::new("meshes/Rock.FBX")).unwrap();
        assert_eq!(importer.resource_type(), ResourceType::Mesh);

        let importer = container.find_for_path(Path::new("ground.png")).unwrap();
        assert_eq!(importer.resource_type(), ResourceType::Texture);

        assert!(container.find_for_path(Path::new("readme.txt")).is_none());
        assert!(container.find_for_path(Path::new("rock.fbx.options")).is_none());
        assert!(container.find_for_path(Path::new("meshes")).is_none());
    }

    #[test]
    fn default_options_match_importer() {
        let options = MeshImporter.default_import_options();
        assert!(options.try_cast::<MeshImportOptions>().is_some());

        let options = TextureImporter.default_import_options();
        assert!(options.try_cast::<TextureImportOptions>().is_some());
    }
}
