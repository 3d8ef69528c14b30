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

//! Button widget.

use crate::message::{BuildContext, MessageDirection, UiMessage, UiMessageData, WidgetHandle};

/// A button with a text. The button itself does nothing, the owner of the button checks
/// incoming messages with [`Button::is_clicked`].
#[derive(Debug, Clone)]
pub struct Button {
    handle: WidgetHandle,
    text: String,
}

impl Button {
    /// Returns handle of the button.
    pub fn handle(&self) -> WidgetHandle {
        self.handle
    }

    /// Returns text of the button.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checks if the message is a click on this button.
    pub fn is_clicked(&self, message: &UiMessage) -> bool {
        message.destination() == self.handle
            && message.direction() == MessageDirection::FromWidget
            && *message.data() == UiMessageData::Click
    }
}

/// Creates [`Button`] instances.
pub struct ButtonBuilder {
    text: String,
}

impl ButtonBuilder {
    /// Creates new button builder.
    pub fn new() -> Self {
        Self {
            text: Default::default(),
        }
    }

    /// Sets the text of the button.
    pub fn with_text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.text = text.as_ref().to_owned();
        self
    }

    /// Finishes button building.
    pub fn build(self, ctx: &mut BuildContext) -> Button {
        Button {
            handle: ctx.new_handle(),
            text: self.text,
        }
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
