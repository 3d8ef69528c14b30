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

//! Bound fields. A field displays a single value with a label and notifies its listeners when
//! the value is edited by the user. See [`Field`] docs for more info.

use crate::message::{
    BuildContext, MessageDirection, UiMessage, UiMessageData, WidgetHandle, MSG_SYNC_FLAG,
};
use std::fmt::{Debug, Formatter};

/// A value that could be displayed and edited by a [`Field`].
pub trait FieldValue: Copy + PartialEq + Debug + 'static {
    /// Extracts the value from a message payload, if the payload is of matching kind.
    fn from_message_data(data: &UiMessageData) -> Option<Self>;
}

impl FieldValue for bool {
    fn from_message_data(data: &UiMessageData) -> Option<Self> {
        match data {
            UiMessageData::Toggle(value) => Some(*value),
            _ => None,
        }
    }
}

impl FieldValue for f32 {
    fn from_message_data(data: &UiMessageData) -> Option<Self> {
        match data {
            UiMessageData::Float(value) => Some(*value),
            _ => None,
        }
    }
}

/// A listener that is called when the user edits the value of a field.
pub type ChangeListener<T> = Box<dyn FnMut(T)>;

/// A labelled field that holds a displayed value.
///
/// There are two ways to change the value:
///
/// - [`Field::set_value`] or a [`MessageDirection::ToWidget`] message (or any message with
///   [`crate::message::MSG_SYNC_FLAG`]) only changes the displayed value,
/// - a [`MessageDirection::FromWidget`] message without the sync flag is a user edit, it changes
///   the displayed value and calls every listener registered by [`Field::on_changed`].
///
/// No validation is performed, the values are passed to listeners as is.
pub struct Field<T: FieldValue> {
    handle: WidgetHandle,
    label: String,
    value: T,
    listeners: Vec<ChangeListener<T>>,
}

/// A field with a check box.
pub type ToggleField = Field<bool>;

/// A field with a numeric input.
pub type FloatField = Field<f32>;

impl<T: FieldValue> Debug for Field<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("handle", &self.handle)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: FieldValue> Field<T> {
    /// Returns handle of the field.
    pub fn handle(&self) -> WidgetHandle {
        self.handle
    }

    /// Returns label of the field.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns displayed value of the field.
    pub fn value(&self) -> T {
        self.value
    }

    /// Registers a listener that will be called on every user edit.
    pub fn on_changed<F>(&mut self, listener: F)
    where
        F: FnMut(T) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Sets displayed value without notifying listeners.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Handles a message addressed to the field. Returns `true` if the message was consumed.
    pub fn handle_ui_message(&mut self, message: &UiMessage) -> bool {
        if message.destination() != self.handle {
            return false;
        }

        let Some(value) = T::from_message_data(message.data()) else {
            return false;
        };

        self.value = value;

        if message.direction() == MessageDirection::FromWidget
            && !message.has_flags(MSG_SYNC_FLAG)
        {
            for listener in self.listeners.iter_mut() {
                listener(value);
            }
        }

        true
    }
}

/// Field builder creates [`Field`] instances.
pub struct FieldBuilder<T: FieldValue> {
    label: String,
    value: T,
}

impl<T: FieldValue + Default> FieldBuilder<T> {
    /// Creates new builder with the given label and default value.
    pub fn new<S: AsRef<str>>(label: S) -> Self {
        Self {
            label: label.as_ref().to_owned(),
            value: T::default(),
        }
    }
}

impl<T: FieldValue> FieldBuilder<T> {
    /// Sets the initial value of the field.
    pub fn with_value(mut self, value: T) -> Self {
        self.value = value;
        self
    }

    /// Finishes field building.
    pub fn build(self, ctx: &mut BuildContext) -> Field<T> {
        Field {
            handle: ctx.new_handle(),
            label: self.label,
            value: self.value,
            listeners: Default::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    fn counted_field(ctx: &mut BuildContext) -> (ToggleField, Rc<Cell<usize>>) {
        let mut field = FieldBuilder::new("Import Normals").build(ctx);
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        field.on_changed(move |_| calls_clone.set(calls_clone.get() + 1));
        (field, calls)
    }

    #[test]
    fn user_edit_notifies_listeners() {
        let mut ctx = BuildContext::new();
        let (mut field, calls) = counted_field(&mut ctx);

        let consumed = field.handle_ui_message(&UiMessage::toggle(
            field.handle(),
            MessageDirection::FromWidget,
            true,
        ));

        assert!(consumed);
        assert!(field.value());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn display_updates_do_not_notify_listeners() {
        let mut ctx = BuildContext::new();
        let (mut field, calls) = counted_field(&mut ctx);

        field.set_value(true);
        field.handle_ui_message(&UiMessage::toggle(
            field.handle(),
            MessageDirection::ToWidget,
            false,
        ));
        field.handle_ui_message(
            &UiMessage::toggle(field.handle(), MessageDirection::FromWidget, true)
                .with_sync_flag(),
        );

        assert!(field.value());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn foreign_messages_are_ignored() {
        let mut ctx = BuildContext::new();
        let (mut field, calls) = counted_field(&mut ctx);
        let other = ctx.new_handle();

        assert!(!field.handle_ui_message(&UiMessage::toggle(
            other,
            MessageDirection::FromWidget,
            true
        )));
        assert!(!field.handle_ui_message(&UiMessage::float(
            field.handle(),
            MessageDirection::FromWidget,
            2.0
        )));

        assert!(!field.value());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn float_field_accepts_any_value() {
        let mut ctx = BuildContext::new();
        let mut field: FloatField = FieldBuilder::new("Scale").with_value(1.0).build(&mut ctx);
        let last = Rc::new(Cell::new(0.0));
        let last_clone = last.clone();
        field.on_changed(move |v| last_clone.set(v));

        field.handle_ui_message(&UiMessage::float(
            field.handle(),
            MessageDirection::FromWidget,
            -3.0,
        ));

        assert_eq!(field.value(), -3.0);
        assert_eq!(last.get(), -3.0);
    }
}
