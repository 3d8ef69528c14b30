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

//! Message and related data types, that are used to deliver user input to inspectors and to
//! set the displayed values of widgets.

use std::fmt::{Display, Formatter};

/// A handle of a widget. Handles are unique within a single inspector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetHandle(u32);

impl WidgetHandle {
    /// Returns index of the widget.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl Display for WidgetHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Widget#{}", self.0)
    }
}

/// Message direction allows you to distinguish from where the message has come from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageDirection {
    /// Used to indicate a request for changes in a widget. Such messages only change what the
    /// widget displays and never reach change listeners.
    ToWidget,

    /// Used to indicate response from a widget, for example a value edited by the user.
    FromWidget,
}

/// A flag that marks a message as a synchronization message. Such messages are used to set the
/// displayed values of widgets and never reach change listeners, even if they come from a widget.
pub const MSG_SYNC_FLAG: u64 = 1;

/// Payload of a message.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UiMessageData {
    /// New value of a toggle field.
    Toggle(bool),
    /// New value of a numeric field.
    Float(f32),
    /// A button was clicked.
    Click,
}

/// A message that is sent by the host to an inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct UiMessage {
    destination: WidgetHandle,
    direction: MessageDirection,
    data: UiMessageData,
    /// A custom user flags. See [`MSG_SYNC_FLAG`].
    pub flags: u64,
}

impl UiMessage {
    /// Creates a new message.
    pub fn new(destination: WidgetHandle, direction: MessageDirection, data: UiMessageData) -> Self {
        Self {
            destination,
            direction,
            data,
            flags: 0,
        }
    }

    /// Creates a message with a new value of a toggle field.
    pub fn toggle(destination: WidgetHandle, direction: MessageDirection, value: bool) -> Self {
        Self::new(destination, direction, UiMessageData::Toggle(value))
    }

    /// Creates a message with a new value of a numeric field.
    pub fn float(destination: WidgetHandle, direction: MessageDirection, value: f32) -> Self {
        Self::new(destination, direction, UiMessageData::Float(value))
    }

    /// Creates a message that notifies about a click on a button.
    pub fn click(destination: WidgetHandle) -> Self {
        Self::new(
            destination,
            MessageDirection::FromWidget,
            UiMessageData::Click,
        )
    }

    /// Marks the message as a synchronization message. See [`MSG_SYNC_FLAG`].
    pub fn with_sync_flag(mut self) -> Self {
        self.flags |= MSG_SYNC_FLAG;
        self
    }

    /// Returns destination widget handle of the message.
    pub fn destination(&self) -> WidgetHandle {
        self.destination
    }

    /// Returns direction of the message.
    pub fn direction(&self) -> MessageDirection {
        self.direction
    }

    /// Returns payload of the message.
    pub fn data(&self) -> &UiMessageData {
        &self.data
    }

    /// Checks if the message has all of the given flags.
    pub fn has_flags(&self, flags: u64) -> bool {
        self.flags & flags == flags
    }
}

/// Allocates widget handles.
#[derive(Default)]
pub struct BuildContext {
    next_handle: u32,
}

impl BuildContext {
    /// Creates a new build context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new unique handle.
    pub fn new_handle(&mut self) -> WidgetHandle {
        let handle = WidgetHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}
