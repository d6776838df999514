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

/// Translator error types
use thiserror::Error;

/// Result type for decode and translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Main error type for the translator
///
/// Every variant except the I/O and configuration ones aborts the
/// translation of the whole instruction stream.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Unknown instruction 0x{word:08X} at 0x{address:08X}")]
    Decode { address: u32, word: u32 },

    #[error("Register index {index} out of range at 0x{address:08X}")]
    InvalidRegister { address: u32, index: u32 },

    #[error("Illegal condition 0x{condition:X} at 0x{address:08X}")]
    IllegalCondition { address: u32, condition: u32 },

    #[error("Unsupported {construct} at 0x{address:08X}")]
    Unsupported { address: u32, construct: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    /// Build an [`TranslateError::Unsupported`] for a modelled opcode whose
    /// sub-case is not translated
    pub fn unsupported(address: u32, construct: impl Into<String>) -> Self {
        Self::Unsupported {
            address,
            construct: construct.into(),
        }
    }

    /// Address of the instruction that caused the error, if any
    pub fn address(&self) -> Option<u32> {
        match self {
            Self::Decode { address, .. }
            | Self::InvalidRegister { address, .. }
            | Self::IllegalCondition { address, .. }
            | Self::Unsupported { address, .. } => Some(*address),
            Self::Io(_) | Self::Config(_) | Self::Json(_) => None,
        }
    }
}
