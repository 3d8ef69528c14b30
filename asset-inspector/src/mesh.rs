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

//! Inspector for import options of mesh resources.

use crate::{
    button::{Button, ButtonBuilder},
    core::{err, log::Log},
    field::{Field, FieldBuilder, FieldValue, FloatField, ToggleField},
    inspector::{InspectedObject, Inspector, InspectorContext, WidgetView},
    layout::Layout,
    library::{
        AssetLibrary, ImportOptionsRef, LibraryError, MeshImportOptions, ResourceType,
    },
    message::{BuildContext, UiMessage, WidgetHandle},
    settings::InspectorSettings,
};
use std::{cell::RefCell, rc::Rc};

/// A slot that holds the import options the inspector currently edits. Field listeners capture
/// the slot, not the options, so replacing the content of the slot redirects all further edits.
type ImportOptionsSlot = Rc<RefCell<Option<ImportOptionsRef<MeshImportOptions>>>>;

/// Shows and edits [`MeshImportOptions`] of a mesh resource and allows to reimport the mesh with
/// the edited options.
///
/// The edited options are the options stored in the library entry of the mesh. If there are
/// none (the mesh is not tracked, its entry has no options or the options are of some other
/// type), the inspector edits its own instance, which is kept until the library gets options
/// for the mesh. On every [`Inspector::refresh`] the fields are overwritten with the values of
/// the options that are resolved at that moment.
pub struct MeshInspector {
    referenced_object: Option<InspectedObject>,
    settings: InspectorSettings,
    import_options: ImportOptionsSlot,
    normals: ToggleField,
    tangents: ToggleField,
    skin: ToggleField,
    blend_shapes: ToggleField,
    animation: ToggleField,
    scale: FloatField,
    cpu_readable: ToggleField,
    reimport: Button,
    layout: Layout,
    initialized: bool,
}

impl MeshInspector {
    /// Creates new inspector for the object. Pass `None` if nothing is selected, such inspector
    /// renders nothing.
    pub fn new(referenced_object: Option<InspectedObject>, settings: InspectorSettings) -> Self {
        let mut ctx = BuildContext::new();

        Self {
            referenced_object,
            settings,
            import_options: Default::default(),
            normals: FieldBuilder::new("Import Normals").build(&mut ctx),
            tangents: FieldBuilder::new("Import Tangents").build(&mut ctx),
            skin: FieldBuilder::new("Import Skin").build(&mut ctx),
            blend_shapes: FieldBuilder::new("Import Blend Shapes").build(&mut ctx),
            animation: FieldBuilder::new("Import Animation").build(&mut ctx),
            scale: FieldBuilder::new("Scale").with_value(1.0).build(&mut ctx),
            cpu_readable: FieldBuilder::new("CPU readable").build(&mut ctx),
            reimport: ButtonBuilder::new().with_text("Reimport").build(&mut ctx),
            layout: Layout::default(),
            initialized: false,
        }
    }

    /// Returns the inspected object.
    pub fn referenced_object(&self) -> Option<&InspectedObject> {
        self.referenced_object.as_ref()
    }

    /// Returns a handle to the import options the inspector currently edits.
    pub fn import_options(&self) -> Option<ImportOptionsRef<MeshImportOptions>> {
        self.import_options.borrow().clone()
    }

    /// "Import Normals" field.
    pub fn normals(&self) -> &ToggleField {
        &self.normals
    }

    /// "Import Tangents" field.
    pub fn tangents(&self) -> &ToggleField {
        &self.tangents
    }

    /// "Import Skin" field.
    pub fn skin(&self) -> &ToggleField {
        &self.skin
    }

    /// "Import Blend Shapes" field.
    pub fn blend_shapes(&self) -> &ToggleField {
        &self.blend_shapes
    }

    /// "Import Animation" field.
    pub fn animation(&self) -> &ToggleField {
        &self.animation
    }

    /// "Scale" field.
    pub fn scale(&self) -> &FloatField {
        &self.scale
    }

    /// "CPU readable" field.
    pub fn cpu_readable(&self) -> &ToggleField {
        &self.cpu_readable
    }

    /// "Reimport" button.
    pub fn reimport_button(&self) -> &Button {
        &self.reimport
    }

    fn stored_import_options(
        &self,
        library: &dyn AssetLibrary,
    ) -> Option<ImportOptionsRef<MeshImportOptions>> {
        let resource = self.referenced_object.as_ref()?.as_resource()?;
        if resource.resource_type() != ResourceType::Mesh {
            return None;
        }

        let path = library.path_of(resource)?;

        library
            .entry(&path)?
            .as_file()?
            .options
            .as_ref()?
            .try_cast::<MeshImportOptions>()
    }

    /// Options stored in the library take precedence, otherwise the current instance is kept
    /// so unsaved edits survive, otherwise a default instance is created.
    fn resolve_import_options(
        &self,
        library: &dyn AssetLibrary,
    ) -> ImportOptionsRef<MeshImportOptions> {
        self.stored_import_options(library)
            .or_else(|| self.import_options())
            .unwrap_or_default()
    }

    fn bind<T: FieldValue>(
        field: &mut Field<T>,
        slot: &ImportOptionsSlot,
        setter: fn(&mut MeshImportOptions, T),
    ) {
        let slot = slot.clone();
        field.on_changed(move |value| {
            if let Some(options) = slot.borrow().as_ref() {
                setter(&mut *options.borrow_mut(), value);
            }
        });
    }

    fn sync_fields(&mut self, options: &MeshImportOptions) {
        self.normals.set_value(options.import_normals);
        self.tangents.set_value(options.import_tangents);
        self.skin.set_value(options.import_skin);
        self.blend_shapes.set_value(options.import_blend_shapes);
        self.animation.set_value(options.import_animation);
        self.scale.set_value(options.scale);
        self.cpu_readable.set_value(options.cpu_readable);
    }

    /// Reimports the inspected mesh with the current import options. Does nothing if there is
    /// nothing to reimport.
    pub fn trigger_reimport(&self, library: &mut dyn AssetLibrary) -> Result<(), LibraryError> {
        let Some(resource) = self
            .referenced_object
            .as_ref()
            .and_then(InspectedObject::as_resource)
        else {
            return Ok(());
        };

        let Some(import_options) = self.import_options() else {
            return Ok(());
        };

        let path = library
            .path_of(resource)
            .ok_or(LibraryError::UnknownResource(*resource))?;

        Log::info(format!("Reimporting {}...", path.display()));

        library
            .reimport(&path, import_options.into_untyped(), true)
            .inspect_err(|e| err!("Unable to reimport {}. Reason: {e}", path.display()))
    }
}

impl Inspector for MeshInspector {
    fn initialize(&mut self, ctx: &mut InspectorContext) {
        if self.initialized || self.referenced_object.is_none() {
            return;
        }

        let import_options = self.resolve_import_options(&*ctx.library);
        *self.import_options.borrow_mut() = Some(import_options.clone());

        Self::bind(&mut self.normals, &self.import_options, |o, v| {
            o.import_normals = v
        });
        Self::bind(&mut self.tangents, &self.import_options, |o, v| {
            o.import_tangents = v
        });
        Self::bind(&mut self.skin, &self.import_options, |o, v| o.import_skin = v);
        Self::bind(&mut self.blend_shapes, &self.import_options, |o, v| {
            o.import_blend_shapes = v
        });
        Self::bind(&mut self.animation, &self.import_options, |o, v| {
            o.import_animation = v
        });
        Self::bind(&mut self.scale, &self.import_options, |o, v| o.scale = v);
        Self::bind(&mut self.cpu_readable, &self.import_options, |o, v| {
            o.cpu_readable = v
        });

        self.sync_fields(&import_options.borrow());

        self.layout.add_element(self.normals.handle());
        self.layout.add_element(self.tangents.handle());
        self.layout.add_element(self.skin.handle());
        self.layout.add_element(self.blend_shapes.handle());
        self.layout.add_element(self.animation.handle());
        self.layout.add_element(self.scale.handle());
        self.layout.add_element(self.cpu_readable.handle());
        self.layout.add_space(self.settings.spacing);

        let reimport = self.reimport.handle();
        self.layout.add_layout_x(|row| {
            row.add_flexible_space();
            row.add_element(reimport);
        });

        self.initialized = true;
    }

    fn refresh(&mut self, ctx: &mut InspectorContext) {
        if !self.initialized {
            return;
        }

        let new_import_options = self.resolve_import_options(&*ctx.library);

        let replaced = self
            .import_options
            .borrow()
            .as_ref()
            .map_or(true, |current| !current.ptr_eq(&new_import_options));
        if replaced {
            if let Some(resource) = self
                .referenced_object
                .as_ref()
                .and_then(InspectedObject::as_resource)
            {
                Log::info(format!(
                    "Import options of {resource} were replaced, the inspector is synchronized."
                ));
            }
        }

        self.sync_fields(&new_import_options.borrow());

        *self.import_options.borrow_mut() = Some(new_import_options);
    }

    fn handle_ui_message(
        &mut self,
        message: &UiMessage,
        ctx: &mut InspectorContext,
    ) -> Result<(), LibraryError> {
        if !self.initialized {
            return Ok(());
        }

        if self.reimport.is_clicked(message) {
            return self.trigger_reimport(ctx.library);
        }

        let _ = self.normals.handle_ui_message(message)
            || self.tangents.handle_ui_message(message)
            || self.skin.handle_ui_message(message)
            || self.blend_shapes.handle_ui_message(message)
            || self.animation.handle_ui_message(message)
            || self.scale.handle_ui_message(message)
            || self.cpu_readable.handle_ui_message(message);

        Ok(())
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn widget(&self, handle: WidgetHandle) -> Option<WidgetView<'_>> {
        [
            &self.normals,
            &self.tangents,
            &self.skin,
            &self.blend_shapes,
            &self.animation,
            &self.cpu_readable,
        ]
        .into_iter()
        .find(|field| field.handle() == handle)
        .map(|field| WidgetView::Toggle {
            label: field.label(),
            label_width: self.settings.label_width,
            value: field.value(),
        })
        .or_else(|| {
            (self.scale.handle() == handle).then(|| WidgetView::Float {
                label: self.scale.label(),
                label_width: self.settings.label_width,
                value: self.scale.value(),
            })
        })
        .or_else(|| {
            (self.reimport.handle() == handle).then(|| WidgetView::Button {
                text: self.reimport.text(),
            })
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        layout::{LayoutItem, Orientation},
        library::{LibraryEntry, ProjectLibrary, Resource, TextureImportOptions, UntypedImportOptions},
        message::MessageDirection,
    };
    use crate::core::log::MessageKind;
    use std::{
        path::{Path, PathBuf},
        sync::mpsc::channel,
    };

    #[derive(Default)]
    struct RecordingLibrary {
        inner: ProjectLibrary,
        reimports: Vec<(PathBuf, UntypedImportOptions, bool)>,
        fail: bool,
    }

    impl AssetLibrary for RecordingLibrary {
        fn entry(&self, path: &Path) -> Option<&LibraryEntry> {
            self.inner.entry(path)
        }

        fn path_of(&self, resource: &Resource) -> Option<PathBuf> {
            self.inner.path_of(resource)
        }

        fn reimport(
            &mut self,
            path: &Path,
            options: UntypedImportOptions,
            force: bool,
        ) -> Result<(), LibraryError> {
            if self.fail {
                return Err(LibraryError::NotFound(path.to_owned()));
            }
            self.reimports.push((path.to_owned(), options, force));
            Ok(())
        }
    }

    fn inspect(library: &mut RecordingLibrary, object: InspectedObject) -> MeshInspector {
        let mut inspector = MeshInspector::new(Some(object), Default::default());
        inspector.initialize(&mut InspectorContext::new(library));
        inspector
    }

    fn refresh(inspector: &mut MeshInspector, library: &mut RecordingLibrary) {
        inspector.refresh(&mut InspectorContext::new(library));
    }

    fn send(
        inspector: &mut MeshInspector,
        library: &mut RecordingLibrary,
        message: UiMessage,
    ) -> Result<(), LibraryError> {
        inspector.handle_ui_message(&message, &mut InspectorContext::new(library))
    }

    fn edit_toggle(
        inspector: &mut MeshInspector,
        library: &mut RecordingLibrary,
        handle: WidgetHandle,
        value: bool,
    ) {
        let message = UiMessage::toggle(handle, MessageDirection::FromWidget, value);
        send(inspector, library, message).unwrap();
    }

    fn edit_scale(inspector: &mut MeshInspector, library: &mut RecordingLibrary, value: f32) {
        let message =
            UiMessage::float(inspector.scale().handle(), MessageDirection::FromWidget, value);
        send(inspector, library, message).unwrap();
    }

    fn click_reimport(
        inspector: &mut MeshInspector,
        library: &mut RecordingLibrary,
    ) -> Result<(), LibraryError> {
        let message = UiMessage::click(inspector.reimport_button().handle());
        send(inspector, library, message)
    }

    fn displayed(inspector: &MeshInspector) -> MeshImportOptions {
        MeshImportOptions {
            import_normals: inspector.normals().value(),
            import_tangents: inspector.tangents().value(),
            import_skin: inspector.skin().value(),
            import_blend_shapes: inspector.blend_shapes().value(),
            import_animation: inspector.animation().value(),
            scale: inspector.scale().value(),
            cpu_readable: inspector.cpu_readable().value(),
        }
    }

    fn add_mesh(
        library: &mut RecordingLibrary,
        options: Option<&ImportOptionsRef<MeshImportOptions>>,
    ) -> InspectedObject {
        let resource = library
            .inner
            .add_file("meshes/rock.fbx", options.map(|o| o.clone().into_untyped()))
            .unwrap();
        InspectedObject::Resource(resource)
    }

    #[test]
    fn inspector_without_object_is_inert() {
        let mut library = RecordingLibrary::default();
        let mut inspector = MeshInspector::new(None, Default::default());
        inspector.initialize(&mut InspectorContext::new(&mut library));
        refresh(&mut inspector, &mut library);

        assert!(inspector.layout().is_empty());
        assert!(inspector.import_options().is_none());
        assert!(click_reimport(&mut inspector, &mut library).is_ok());
        assert!(library.reimports.is_empty());
    }

    #[test]
    fn layout_lists_fields_then_reimport_row() {
        let mut library = RecordingLibrary::default();
        let object = add_mesh(&mut library, None);
        let inspector = inspect(&mut library, object);

        let items = inspector.layout().items();
        assert_eq!(items.len(), 9);
        assert_eq!(items[7], LayoutItem::Space(10.0));
        match &items[8] {
            LayoutItem::Layout(row) => {
                assert_eq!(row.orientation(), Orientation::Horizontal);
                assert_eq!(
                    row.items(),
                    &[
                        LayoutItem::FlexibleSpace,
                        LayoutItem::Element(inspector.reimport_button().handle())
                    ]
                );
            }
            _ => panic!("Must be a layout"),
        }

        let views = inspector
            .layout()
            .elements()
            .into_iter()
            .map(|handle| inspector.widget(handle).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            views,
            vec![
                WidgetView::Toggle {
                    label: "Import Normals",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Toggle {
                    label: "Import Tangents",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Toggle {
                    label: "Import Skin",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Toggle {
                    label: "Import Blend Shapes",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Toggle {
                    label: "Import Animation",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Float {
                    label: "Scale",
                    label_width: 150.0,
                    value: 1.0
                },
                WidgetView::Toggle {
                    label: "CPU readable",
                    label_width: 150.0,
                    value: false
                },
                WidgetView::Button { text: "Reimport" },
            ]
        );
    }

    #[test]
    fn edit_stored_options_and_reimport() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions {
            import_normals: true,
            scale: 1.0,
            ..Default::default()
        });
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);

        assert!(inspector.normals().value());
        assert_eq!(inspector.scale().value(), 1.0);
        assert!(inspector.import_options().unwrap().ptr_eq(&stored));

        edit_scale(&mut inspector, &mut library, 2.5);
        assert_eq!(stored.borrow().scale, 2.5);

        let displayed_before = displayed(&inspector);
        click_reimport(&mut inspector, &mut library).unwrap();

        assert_eq!(library.reimports.len(), 1);
        let (path, options, force) = &library.reimports[0];
        assert_eq!(path, Path::new("meshes/rock.fbx"));
        assert!(*force);
        let options = options.try_cast::<MeshImportOptions>().unwrap();
        assert!(options.ptr_eq(&stored));
        assert_eq!(options.borrow().scale, 2.5);

        assert_eq!(displayed(&inspector), displayed_before);
        assert!(inspector.import_options().unwrap().ptr_eq(&stored));
        assert_eq!(*stored.borrow(), displayed_before);
    }

    #[test]
    fn every_field_writes_into_current_options() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions::default());
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);

        let toggles = [
            inspector.normals().handle(),
            inspector.tangents().handle(),
            inspector.skin().handle(),
            inspector.blend_shapes().handle(),
            inspector.animation().handle(),
            inspector.cpu_readable().handle(),
        ];
        for handle in toggles {
            edit_toggle(&mut inspector, &mut library, handle, true);
        }
        edit_scale(&mut inspector, &mut library, -0.5);

        let expected = MeshImportOptions {
            import_normals: true,
            import_tangents: true,
            import_skin: true,
            import_blend_shapes: true,
            import_animation: true,
            scale: -0.5,
            cpu_readable: true,
        };
        assert_eq!(*stored.borrow(), expected);
        assert_eq!(displayed(&inspector), expected);

        let tangents = inspector.tangents().handle();
        edit_toggle(&mut inspector, &mut library, tangents, false);
        assert!(!stored.borrow().import_tangents);
    }

    #[test]
    fn refresh_without_changes_is_idempotent() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions {
            import_skin: true,
            scale: 0.01,
            ..Default::default()
        });
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);

        refresh(&mut inspector, &mut library);
        let first = displayed(&inspector);
        refresh(&mut inspector, &mut library);

        assert_eq!(displayed(&inspector), first);
        assert_eq!(first, *stored.borrow());
        assert!(inspector.import_options().unwrap().ptr_eq(&stored));
    }

    #[test]
    fn refresh_picks_up_replaced_options() {
        let mut library = RecordingLibrary::default();
        let old = ImportOptionsRef::new(MeshImportOptions::default());
        let object = add_mesh(&mut library, Some(&old));
        let mut inspector = inspect(&mut library, object);

        let new = ImportOptionsRef::new(MeshImportOptions {
            import_blend_shapes: true,
            scale: 3.0,
            ..Default::default()
        });
        library
            .inner
            .set_options("meshes/rock.fbx", Some(new.clone().into_untyped()))
            .unwrap();
        refresh(&mut inspector, &mut library);

        assert_eq!(displayed(&inspector), *new.borrow());
        assert!(inspector.import_options().unwrap().ptr_eq(&new));

        let normals = inspector.normals().handle();
        edit_toggle(&mut inspector, &mut library, normals, true);
        assert!(new.borrow().import_normals);
        assert!(!old.borrow().import_normals);
    }

    #[test]
    fn refresh_picks_up_options_changed_in_place() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions::default());
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);

        stored.borrow_mut().import_animation = true;
        refresh(&mut inspector, &mut library);

        assert!(inspector.animation().value());
    }

    #[test]
    fn local_options_are_reused_while_nothing_is_stored() {
        let mut library = RecordingLibrary::default();
        let object = add_mesh(&mut library, None);
        let mut inspector = inspect(&mut library, object);

        assert_eq!(displayed(&inspector), MeshImportOptions::default());
        let local = inspector.import_options().unwrap();

        let skin = inspector.skin().handle();
        edit_toggle(&mut inspector, &mut library, skin, true);
        refresh(&mut inspector, &mut library);
        refresh(&mut inspector, &mut library);

        let current = inspector.import_options().unwrap();
        assert!(current.ptr_eq(&local));
        assert!(current.borrow().import_skin);
        assert!(inspector.skin().value());
    }

    #[test]
    fn stored_options_override_local_edits() {
        let mut library = RecordingLibrary::default();
        let object = add_mesh(&mut library, None);
        let mut inspector = inspect(&mut library, object);

        edit_scale(&mut inspector, &mut library, 3.0);
        assert_eq!(inspector.import_options().unwrap().borrow().scale, 3.0);

        let stored = ImportOptionsRef::new(MeshImportOptions {
            import_normals: true,
            scale: 0.5,
            ..Default::default()
        });
        library
            .inner
            .set_options("meshes/rock.fbx", Some(stored.clone().into_untyped()))
            .unwrap();
        refresh(&mut inspector, &mut library);

        assert_eq!(displayed(&inspector), *stored.borrow());
        assert!(inspector.import_options().unwrap().ptr_eq(&stored));
    }

    #[test]
    fn display_updates_never_write_into_options() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions::default());
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);

        let normals = inspector.normals().handle();
        let scale = inspector.scale().handle();
        send(
            &mut inspector,
            &mut library,
            UiMessage::toggle(normals, MessageDirection::ToWidget, true),
        )
        .unwrap();
        send(
            &mut inspector,
            &mut library,
            UiMessage::float(scale, MessageDirection::FromWidget, 7.0).with_sync_flag(),
        )
        .unwrap();

        assert!(inspector.normals().value());
        assert_eq!(inspector.scale().value(), 7.0);
        assert_eq!(*stored.borrow(), MeshImportOptions::default());

        refresh(&mut inspector, &mut library);

        assert_eq!(*stored.borrow(), MeshImportOptions::default());
        assert_eq!(displayed(&inspector), MeshImportOptions::default());
    }

    #[test]
    fn options_of_other_type_are_ignored() {
        let mut library = RecordingLibrary::default();
        let resource = library
            .inner
            .add_file(
                "meshes/rock.fbx",
                Some(TextureImportOptions::default().into()),
            )
            .unwrap();
        let inspector = inspect(&mut library, InspectedObject::Resource(resource));

        assert_eq!(displayed(&inspector), MeshImportOptions::default());
        assert!(inspector.import_options().is_some());
    }

    #[test]
    fn untracked_mesh_uses_defaults_and_fails_to_reimport() {
        let mut library = RecordingLibrary::default();
        let resource = Resource::new(ResourceType::Mesh);
        let mut inspector = inspect(&mut library, InspectedObject::Resource(resource));

        assert_eq!(displayed(&inspector), MeshImportOptions::default());
        assert!(matches!(
            click_reimport(&mut inspector, &mut library),
            Err(LibraryError::UnknownResource(r)) if r == resource
        ));
        assert!(library.reimports.is_empty());
    }

    #[test]
    fn non_mesh_objects_get_default_options() {
        let mut library = RecordingLibrary::default();
        let texture = library
            .inner
            .add_file("ground.png", Some(TextureImportOptions::default().into()))
            .unwrap();

        let inspector = inspect(&mut library, InspectedObject::Resource(texture));
        assert_eq!(displayed(&inspector), MeshImportOptions::default());

        let mut inspector = inspect(&mut library, InspectedObject::Other("Camera".to_owned()));
        assert_eq!(displayed(&inspector), MeshImportOptions::default());
        assert!(inspector.import_options().is_some());
        assert!(click_reimport(&mut inspector, &mut library).is_ok());
        assert!(library.reimports.is_empty());
    }

    #[test]
    fn reimport_errors_are_propagated() {
        let mut library = RecordingLibrary {
            fail: true,
            ..Default::default()
        };
        let object = add_mesh(&mut library, None);
        let mut inspector = inspect(&mut library, object);

        let (sender, receiver) = channel();
        Log::add_listener(sender);

        assert!(matches!(
            click_reimport(&mut inspector, &mut library),
            Err(LibraryError::NotFound(_))
        ));

        let logged = receiver.try_iter().any(|message| {
            message.kind == MessageKind::Error
                && message.content.starts_with("Unable to reimport meshes")
        });
        assert!(logged);
    }

    #[test]
    fn refresh_before_initialize_is_noop() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions {
            import_normals: true,
            scale: 2.0,
            ..Default::default()
        });
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = MeshInspector::new(Some(object), Default::default());

        refresh(&mut inspector, &mut library);

        assert!(inspector.import_options().is_none());
        assert!(inspector.layout().is_empty());
        assert!(!inspector.normals().value());
        assert_eq!(inspector.scale().value(), 1.0);

        let normals = inspector.normals().handle();
        edit_toggle(&mut inspector, &mut library, normals, false);
        assert!(stored.borrow().import_normals);
    }

    #[test]
    fn initialize_twice_binds_once() {
        let mut library = RecordingLibrary::default();
        let stored = ImportOptionsRef::new(MeshImportOptions::default());
        let object = add_mesh(&mut library, Some(&stored));
        let mut inspector = inspect(&mut library, object);
        inspector.initialize(&mut InspectorContext::new(&mut library));

        assert_eq!(inspector.layout().items().len(), 9);
        assert_eq!(inspector.layout().elements().len(), 8);

        // The inspector itself and one listener per field hold the slot.
        assert_eq!(Rc::strong_count(&inspector.import_options), 8);

        edit_scale(&mut inspector, &mut library, 4.0);
        let skin = inspector.skin().handle();
        edit_toggle(&mut inspector, &mut library, skin, true);
        assert!(stored.borrow().import_skin);
        assert_eq!(stored.borrow().scale, 4.0);
    }

    #[test]
    fn label_width_comes_from_settings() {
        let mut library = RecordingLibrary::default();
        let object = add_mesh(&mut library, None);
        let settings = InspectorSettings {
            label_width: 42.0,
            ..Default::default()
        };
        let mut inspector = MeshInspector::new(Some(object), settings);
        inspector.initialize(&mut InspectorContext::new(&mut library));

        assert_eq!(
            inspector.widget(inspector.skin().handle()),
            Some(WidgetView::Toggle {
                label: "Import Skin",
                label_width: 42.0,
                value: false
            })
        );
        assert_eq!(
            inspector.widget(inspector.scale().handle()),
            Some(WidgetView::Float {
                label: "Scale",
                label_width: 42.0,
                value: 1.0
            })
        );
    }

    #[test]
    fn reimport_through_project_library() {
        let mut library = ProjectLibrary::new();
        let resource = library.add_file("rock.fbx", None).unwrap();
        let mut inspector =
            MeshInspector::new(Some(InspectedObject::Resource(resource)), Default::default());
        inspector.initialize(&mut InspectorContext::new(&mut library));

        let message = UiMessage::toggle(
            inspector.cpu_readable().handle(),
            MessageDirection::FromWidget,
            true,
        );
        inspector
            .handle_ui_message(&message, &mut InspectorContext::new(&mut library))
            .unwrap();
        inspector.trigger_reimport(&mut library).unwrap();

        let stored = library
            .entry(Path::new("rock.fbx"))
            .and_then(|e| e.as_file())
            .and_then(|f| f.options.as_ref())
            .and_then(|o| o.try_cast::<MeshImportOptions>())
            .unwrap();
        assert!(stored.borrow().cpu_readable);

        // From now on the library record is edited.
        inspector.refresh(&mut InspectorContext::new(&mut library));
        assert!(inspector.import_options().unwrap().ptr_eq(&stored));
    }
}
