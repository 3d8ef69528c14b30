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

//! Library event handling.

use std::{path::PathBuf, sync::mpsc::Sender};

/// A library event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    /// Occurs when a new entry was added to the library.
    Added(PathBuf),

    /// Occurs when an entry was removed from the library.
    Removed(PathBuf),

    /// Occurs when import options of a file entry were replaced.
    OptionsChanged(PathBuf),

    /// Occurs when a file was reimported.
    Reimported {
        /// Path of the reimported file.
        path: PathBuf,
        /// Whether the reimport was forced.
        forced: bool,
    },
}

/// Type alias for event sender.
pub type LibraryEventSender = Sender<LibraryEvent>;

/// Event broadcaster is responsible for delivering library events to "subscribers".
/// Disconnected subscribers are removed on the next broadcast.
#[derive(Default)]
pub struct LibraryEventBroadcaster {
    senders: Vec<LibraryEventSender>,
}

impl LibraryEventBroadcaster {
    /// Creates new empty event broadcaster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event sender to the broadcaster.
    pub fn add(&mut self, sender: LibraryEventSender) {
        self.senders.push(sender);
    }

    /// Returns amount of subscribers.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Returns `true` if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Sends an event to all "subscribers" in the broadcaster.
    pub fn broadcast(&mut self, event: LibraryEvent) {
        self.senders
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}
