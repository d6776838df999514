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

//! Decoders and translators
//!
//! This module contains one pipeline per instruction set:
//! - MIPS I (branch delay slots, stack-slot variables)
//! - ARM state of ARMv4T (predication, shifter operands)
//! - Thumb (16-bit groups and the 32-bit long branch with link)
//!
//! and the pieces they share: output bookkeeping, condition codes, ordered
//! pattern matching, configuration and the listing lexer.

pub mod arm;
pub mod condition;
pub mod config;
pub mod error;
pub mod listing;
pub mod mips;
pub mod output;
pub mod pattern;
pub mod thumb;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export commonly used types
pub use config::{RegisterStyle, TranslatorConfig};
pub use error::{Result, TranslateError};

/// Supported instruction sets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Isa {
    /// MIPS I, 32-bit words with branch delay slots
    Mips,
    /// ARM state, 32-bit predicated words
    Arm,
    /// Thumb state, 16-bit words plus 32-bit BL/BLX pairs
    Thumb,
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Isa::Mips => "MIPS",
            Isa::Arm => "ARM",
            Isa::Thumb => "Thumb",
        };
        f.write_str(name)
    }
}

/// Decode and translate an instruction stream
///
/// # Arguments
///
/// * `isa` - Instruction set of every word in the stream
/// * `words` - Ordered `(address, word)` pairs
/// * `config` - Translator configuration
///
/// # Returns
///
/// - `Ok(lines)` with declarations first, then one block per address
/// - `Err(TranslateError)` on the first decode or translation failure
///
/// # Example
/// ```
/// use asmlift::core::{translate, Isa, TranslatorConfig};
///
/// // jr ra; nop
/// let lines = translate(
///     Isa::Mips,
///     &[(0x8001_0000, 0x03E0_0008), (0x8001_0004, 0)],
///     &TranslatorConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(lines, vec!["long ra;", "return;"]);
/// ```
pub fn translate(isa: Isa, words: &[(u32, u32)], config: &TranslatorConfig) -> Result<Vec<String>> {
    match isa {
        Isa::Mips => mips::translate(words, config),
        Isa::Arm => arm::translate(words, config),
        Isa::Thumb => thumb::translate(words, config),
    }
}
