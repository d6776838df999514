// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Translator configuration
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! file (or no file at all) yields [`TranslatorConfig::default`].
//!
//! ```toml
//! register-style = "cpu-state"
//! declarations = false
//! ```

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How architectural registers are spelled in the generated pseudocode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RegisterStyle {
    /// Registers are free-standing local variables (`r0`, `sp`, `v0`)
    #[default]
    Locals,
    /// Registers are reached through the processor-state accessor
    /// (`CPU.r0().value`)
    CpuState,
}

impl RegisterStyle {
    /// Render a register name in this style
    pub fn render(self, name: &str) -> String {
        match self {
            RegisterStyle::Locals => name.to_string(),
            RegisterStyle::CpuState => format!("CPU.{}().value", name),
        }
    }
}

/// Options shared by the MIPS, ARM and Thumb translators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TranslatorConfig {
    /// Register addressing convention
    pub register_style: RegisterStyle,

    /// Emit the declaration block ahead of the code
    pub declarations: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            register_style: RegisterStyle::Locals,
            declarations: true,
        }
    }
}

impl TranslatorConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Example
    /// ```
    /// use asmlift::core::config::{RegisterStyle, TranslatorConfig};
    ///
    /// let config = TranslatorConfig::from_toml_str("register-style = \"cpu-state\"").unwrap();
    /// assert_eq!(config.register_style, RegisterStyle::CpuState);
    /// assert!(config.declarations);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file
    ///
    /// # Returns
    ///
    /// - `Ok(TranslatorConfig)` if the file was read and parsed
    /// - `Err(TranslateError)` on I/O or parse failure
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Builder-style override of the register style
    pub fn with_register_style(mut self, style: RegisterStyle) -> Self {
        self.register_style = style;
        self
    }

    /// Whether register declarations should be written
    ///
    /// Registers reached through the processor state are never declared.
    pub fn declares_registers(&self) -> bool {
        self.declarations && self.register_style == RegisterStyle::Locals
    }
}
