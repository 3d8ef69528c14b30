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

//! Resource identity. A resource is identified by its UUID, the path of a resource is tracked
//! by the library and may change over time.

use crate::core::Uuid;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of the data a resource holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// A mesh (model) resource.
    Mesh,
    /// A texture resource.
    Texture,
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Mesh => write!(f, "Mesh"),
            ResourceType::Texture => write!(f, "Texture"),
        }
    }
}

/// A reference to a resource managed by a library.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    uuid: Uuid,
    resource_type: ResourceType,
}

impl Resource {
    /// Creates a new resource reference with a random UUID.
    pub fn new(resource_type: ResourceType) -> Self {
        Self::with_uuid(Uuid::new_v4(), resource_type)
    }

    /// Creates a resource reference with the given UUID.
    pub fn with_uuid(uuid: Uuid, resource_type: ResourceType) -> Self {
        Self {
            uuid,
            resource_type,
        }
    }

    /// Returns UUID of the resource.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the type of the resource.
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} resource {}", self.resource_type, self.uuid)
    }
}
