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

//! Texture import options.

use crate::options::ImportOptions;
use serde::{Deserialize, Serialize};

/// Import options that define how a texture is processed when it is (re)imported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureImportOptions {
    /// Whether a full mip chain should be generated.
    pub generate_mip_maps: bool,
    /// Whether the texture data is in sRGB color space.
    pub srgb: bool,
    /// Whether the pixels should stay accessible on the CPU after upload.
    pub cpu_readable: bool,
}

impl Default for TextureImportOptions {
    fn default() -> Self {
        Self {
            generate_mip_maps: true,
            srgb: true,
            cpu_readable: false,
        }
    }
}

impl ImportOptions for TextureImportOptions {}
