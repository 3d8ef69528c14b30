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

//! Inspector lifecycle and the registry of inspectors. See [`Inspector`] docs for more info.

use crate::{
    core::fxhash::FxHashMap,
    layout::Layout,
    library::{AssetLibrary, LibraryError, Resource, ResourceType},
    mesh::MeshInspector,
    message::{UiMessage, WidgetHandle},
    settings::InspectorSettings,
};

/// An object selected in an editor for inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectedObject {
    /// A resource tracked by an asset library.
    Resource(Resource),
    /// Anything else (scene nodes, plugins, etc.), described by its type name.
    Other(String),
}

impl InspectedObject {
    /// Returns the resource, if the object is a resource.
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            InspectedObject::Resource(resource) => Some(resource),
            InspectedObject::Other(_) => None,
        }
    }
}

/// Everything an inspector needs from its host.
pub struct InspectorContext<'a> {
    /// The asset library the inspected object belongs to.
    pub library: &'a mut dyn AssetLibrary,
}

impl<'a> InspectorContext<'a> {
    /// Creates a new context.
    pub fn new(library: &'a mut dyn AssetLibrary) -> Self {
        Self { library }
    }
}

/// Read-only view of a widget, used by the host to render it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WidgetView<'a> {
    /// A field with a check box.
    Toggle {
        /// Label of the field.
        label: &'a str,
        /// Width reserved for the label.
        label_width: f32,
        /// Displayed value.
        value: bool,
    },
    /// A field with a numeric input.
    Float {
        /// Label of the field.
        label: &'a str,
        /// Width reserved for the label.
        label_width: f32,
        /// Displayed value.
        value: f32,
    },
    /// A button.
    Button {
        /// Text of the button.
        text: &'a str,
    },
}

/// An inspector is a panel that shows and edits some properties of an inspected object. The
/// host creates an inspector for the selected object and drives it:
///
/// 1. [`Inspector::initialize`] once, when the inspector is shown for the first time,
/// 2. [`Inspector::refresh`] on its own cadence (every frame, on external change notifications,
///    etc.) to pick up changes made outside of the inspector,
/// 3. [`Inspector::handle_ui_message`] for every message produced by the widgets listed in
///    [`Inspector::layout`].
///
/// All calls are made from the same thread and never overlap.
pub trait Inspector {
    /// Creates and binds the widgets.
    fn initialize(&mut self, ctx: &mut InspectorContext);

    /// Synchronizes the widgets with the current state of the inspected object.
    fn refresh(&mut self, ctx: &mut InspectorContext);

    /// Handles a message from the host. Errors of the actions triggered by the message are
    /// returned as is.
    fn handle_ui_message(
        &mut self,
        message: &UiMessage,
        ctx: &mut InspectorContext,
    ) -> Result<(), LibraryError>;

    /// Returns the layout of the widgets. Empty if nothing should be rendered.
    fn layout(&self) -> &Layout;

    /// Returns a view of a widget by its handle.
    fn widget(&self, handle: WidgetHandle) -> Option<WidgetView<'_>>;
}

/// A function that creates an inspector for an object.
pub type InspectorConstructor =
    Box<dyn Fn(InspectedObject, &InspectorSettings) -> Box<dyn Inspector>>;

/// Keeps a `resource type -> inspector` mapping, so the host could create a specific inspector
/// for a selected resource.
pub struct InspectorRegistry {
    constructors: FxHashMap<ResourceType, InspectorConstructor>,
}

impl Default for InspectorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ResourceType::Mesh, |object, settings| {
            Box::new(MeshInspector::new(Some(object), settings.clone()))
        });
        registry
    }
}

impl InspectorRegistry {
    /// Creates a registry without any inspectors.
    pub fn empty() -> Self {
        Self {
            constructors: Default::default(),
        }
    }

    /// Registers an inspector for the given resource type, replacing existing one.
    pub fn register<F>(&mut self, resource_type: ResourceType, constructor: F)
    where
        F: Fn(InspectedObject, &InspectorSettings) -> Box<dyn Inspector> + 'static,
    {
        self.constructors
            .insert(resource_type, Box::new(constructor));
    }

    /// Checks if there is an inspector for the given resource type.
    pub fn has_inspector(&self, resource_type: ResourceType) -> bool {
        self.constructors.contains_key(&resource_type)
    }

    /// Creates an inspector for the object. Returns `None` if the object is not a resource or
    /// there is no inspector for its type.
    pub fn create(
        &self,
        object: InspectedObject,
        settings: &InspectorSettings,
    ) -> Option<Box<dyn Inspector>> {
        let resource_type = object.as_resource()?.resource_type();
        let constructor = self.constructors.get(&resource_type)?;
        Some(constructor(object, settings))
    }
}
