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

//! Inspectors for import options of assets. An inspector is a panel that is created by a host
//! (an editor) for a selected object, shows a set of fields bound to the import options of the
//! object and keeps them in sync with the asset library. See [`mesh::MeshInspector`].
//!
//! The crate does not render anything, it describes widgets and their [`layout::Layout`] and
//! reacts to [`message::UiMessage`]s sent by the host.

#![warn(missing_docs)]

pub use asset_core as core;
pub use asset_library as library;

pub mod button;
pub mod field;
pub mod inspector;
pub mod layout;
pub mod mesh;
pub mod message;
pub mod settings;

pub use inspector::{InspectedObject, Inspector, InspectorContext, InspectorRegistry, WidgetView};
pub use mesh::MeshInspector;
pub use settings::InspectorSettings;
