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

//! Mesh import options.

use crate::options::ImportOptions;
use serde::{Deserialize, Serialize};

/// Import options that define how a mesh is processed when it is (re)imported.
///
/// # Options file
///
/// Mesh options are stored next to the source file in a `.options` file, `rock.fbx` has its
/// options in `rock.fbx.options`:
///
/// ```text
/// (
///     import_normals: true,
///     import_tangents: false,
///     import_skin: false,
///     import_blend_shapes: false,
///     import_animation: false,
///     scale: 1.0,
///     cpu_readable: false,
/// )
/// ```
///
/// Every field is optional, missing fields take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshImportOptions {
    /// Whether vertex normals should be imported.
    pub import_normals: bool,
    /// Whether vertex tangents should be imported.
    pub import_tangents: bool,
    /// Whether skinning data (bones and weights) should be imported.
    pub import_skin: bool,
    /// Whether blend shapes (morph targets) should be imported.
    pub import_blend_shapes: bool,
    /// Whether animation clips should be imported.
    pub import_animation: bool,
    /// Uniform scale applied to the imported geometry. Passed as-is, no validation is performed.
    pub scale: f32,
    /// Whether the mesh data should stay accessible on the CPU after upload.
    pub cpu_readable: bool,
}

impl Default for MeshImportOptions {
    fn default() -> Self {
        Self {
            import_normals: false,
            import_tangents: false,
            import_skin: false,
            import_blend_shapes: false,
            import_animation: false,
            scale: 1.0,
            cpu_readable: false,
        }
    }
}

impl ImportOptions for MeshImportOptions {}
