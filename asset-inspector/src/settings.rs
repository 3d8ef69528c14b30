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

//! Inspector settings. Stored in a RON file, see [`InspectorSettings`].

use crate::core::log::Log;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    fs::File,
    path::Path,
};

/// An error that may occur during settings loading or saving.
#[derive(Debug)]
pub enum SettingsError {
    /// An i/o error has occurred.
    Io(std::io::Error),
    /// Unable to serialize settings.
    Ron(ron::Error),
    /// Malformed settings file.
    Parse(ron::error::SpannedError),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(v) => write!(f, "An i/o error has occurred: {v}"),
            SettingsError::Ron(v) => write!(f, "Unable to serialize settings: {v}"),
            SettingsError::Parse(v) => write!(f, "Malformed settings: {v}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        Self::Ron(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::Parse(e)
    }
}

/// Settings shared by all inspectors.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct InspectorSettings {
    /// Vertical space between the fields and the row with action buttons.
    pub spacing: f32,
    /// Width of the labels of the fields, passed to the host with every field view.
    pub label_width: f32,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            label_width: 150.0,
        }
    }
}

impl InspectorSettings {
    /// Default name of the settings file.
    pub const FILE_NAME: &'static str = "inspector.ron";

    /// Loads settings from a file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }

    /// Loads settings from a file, falls back to defaults if the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                Log::warn(format!(
                    "Unable to load inspector settings from {}, fallback to defaults. Reason: {e}",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Saves settings into a file.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let file = File::create(path)?;
        ron::ser::to_writer_pretty(file, self, PrettyConfig::default())?;
        Ok(())
    }
}
