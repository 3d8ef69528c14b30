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

//! Layout of an inspector. Inspectors describe how their widgets are arranged, the host
//! renders the description.

use crate::message::WidgetHandle;

/// Defines an orientation of a layout.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are placed one under another.
    #[default]
    Vertical,
    /// Children are placed one after another in a row.
    Horizontal,
}

/// An item of a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    /// A widget.
    Element(WidgetHandle),
    /// Fixed amount of empty space along the layout orientation.
    Space(f32),
    /// Empty space that takes all available room along the layout orientation.
    FlexibleSpace,
    /// A nested layout.
    Layout(Layout),
}

/// A stack of layout items.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    items: Vec<LayoutItem>,
}

impl Layout {
    /// Creates new empty layout.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            items: Vec::new(),
        }
    }

    /// Returns orientation of the layout.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns items of the layout.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Returns `true` if the layout has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a widget.
    pub fn add_element(&mut self, handle: WidgetHandle) {
        self.items.push(LayoutItem::Element(handle));
    }

    /// Adds fixed amount of space.
    pub fn add_space(&mut self, amount: f32) {
        self.items.push(LayoutItem::Space(amount));
    }

    /// Adds flexible space.
    pub fn add_flexible_space(&mut self) {
        self.items.push(LayoutItem::FlexibleSpace);
    }

    /// Adds a nested horizontal layout, filled by the given function.
    pub fn add_layout_x<F>(&mut self, fill: F)
    where
        F: FnOnce(&mut Layout),
    {
        let mut layout = Layout::new(Orientation::Horizontal);
        fill(&mut layout);
        self.items.push(LayoutItem::Layout(layout));
    }

    /// Returns handles of every widget in the layout, including nested layouts, in order.
    pub fn elements(&self) -> Vec<WidgetHandle> {
        let mut elements = Vec::new();
        self.collect_elements(&mut elements);
        elements
    }

    fn collect_elements(&self, elements: &mut Vec<WidgetHandle>) {
        for item in self.items.iter() {
            match item {
                LayoutItem::Element(handle) => elements.push(*handle),
                LayoutItem::Layout(layout) => layout.collect_elements(elements),
                LayoutItem::Space(_) | LayoutItem::FlexibleSpace => (),
            }
        }
    }
}
