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

//! ARM condition codes
//!
//! Every ARM instruction (and the Thumb conditional branch) carries a 4-bit
//! condition evaluated against the N, Z, C and V flags of CPSR. Translation
//! wraps the statement in a guard whose expression is fixed per code.

use super::error::{Result, TranslateError};
use super::output::indent;

/// 4-bit condition field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Z set
    Eq,
    /// Z clear
    Ne,
    /// C set
    Cs,
    /// C clear
    Cc,
    /// N set
    Mi,
    /// N clear
    Pl,
    /// V set
    Vs,
    /// V clear
    Vc,
    /// C set and Z clear
    Hi,
    /// C clear or Z set
    Ls,
    /// N equals V
    Ge,
    /// N not equal to V
    Lt,
    /// Z clear and N equals V
    Gt,
    /// Z set or N not equal to V
    Le,
    /// Always
    Al,
}

/// Conditions indexed by their encoding, `0xF` is reserved
const CONDITIONS: [Option<Condition>; 16] = [
    Some(Condition::Eq),
    Some(Condition::Ne),
    Some(Condition::Cs),
    Some(Condition::Cc),
    Some(Condition::Mi),
    Some(Condition::Pl),
    Some(Condition::Vs),
    Some(Condition::Vc),
    Some(Condition::Hi),
    Some(Condition::Ls),
    Some(Condition::Ge),
    Some(Condition::Lt),
    Some(Condition::Gt),
    Some(Condition::Le),
    Some(Condition::Al),
    None,
];

impl Condition {
    /// Decode a 4-bit condition field
    ///
    /// # Arguments
    ///
    /// * `bits` - Condition value (only the low 4 bits are used)
    /// * `address` - Address of the instruction, for error reporting
    ///
    /// # Returns
    ///
    /// - `Ok(Condition)` for codes 0x0-0xE
    /// - `Err(TranslateError::IllegalCondition)` for the reserved code 0xF
    pub fn from_bits(bits: u32, address: u32) -> Result<Self> {
        CONDITIONS[(bits & 0xF) as usize].ok_or(TranslateError::IllegalCondition {
            address,
            condition: bits & 0xF,
        })
    }

    /// Condition of an ARM instruction word (bits 28-31)
    pub fn of_word(word: u32, address: u32) -> Result<Self> {
        Self::from_bits(word >> 28, address)
    }

    /// Flag expression tested by the guard, `None` for [`Condition::Al`]
    pub fn guard(self) -> Option<&'static str> {
        let guard = match self {
            Condition::Eq => "CPU.cpsr().getZero()",
            Condition::Ne => "!CPU.cpsr().getZero()",
            Condition::Cs => "CPU.cpsr().getCarry()",
            Condition::Cc => "!CPU.cpsr().getCarry()",
            Condition::Mi => "CPU.cpsr().getNegative()",
            Condition::Pl => "!CPU.cpsr().getNegative()",
            Condition::Vs => "CPU.cpsr().getOverflow()",
            Condition::Vc => "!CPU.cpsr().getOverflow()",
            Condition::Hi => "CPU.cpsr().getCarry() && !CPU.cpsr().getZero()",
            Condition::Ls => "!CPU.cpsr().getCarry() || CPU.cpsr().getZero()",
            Condition::Ge => "CPU.cpsr().getNegative() == CPU.cpsr().getOverflow()",
            Condition::Lt => "CPU.cpsr().getNegative() != CPU.cpsr().getOverflow()",
            Condition::Gt => {
                "!CPU.cpsr().getZero() && CPU.cpsr().getNegative() == CPU.cpsr().getOverflow()"
            }
            Condition::Le => {
                "CPU.cpsr().getZero() || CPU.cpsr().getNegative() != CPU.cpsr().getOverflow()"
            }
            Condition::Al => return None,
        };
        Some(guard)
    }

    /// Human readable relation printed after the guard
    pub fn comment(self) -> &'static str {
        match self {
            Condition::Eq => "==",
            Condition::Ne => "!=",
            Condition::Cs => "unsigned >=",
            Condition::Cc => "unsigned <",
            Condition::Mi => "negative",
            Condition::Pl => "positive or 0",
            Condition::Vs => "signed overflow",
            Condition::Vc => "signed no overflow",
            Condition::Hi => "unsigned >",
            Condition::Ls => "unsigned <=",
            Condition::Ge => ">=",
            Condition::Lt => "<",
            Condition::Gt => ">",
            Condition::Le => "<=",
            Condition::Al => "",
        }
    }

    /// Wrap `text` in this condition's guard
    ///
    /// ```
    /// use asmlift::core::condition::Condition;
    ///
    /// assert_eq!(
    ///     Condition::Eq.wrap("r0 = 0x1;"),
    ///     "if(CPU.cpsr().getZero()) { // ==\n  r0 = 0x1;\n}"
    /// );
    /// assert_eq!(Condition::Al.wrap("r0 = 0x1;"), "r0 = 0x1;");
    /// ```
    pub fn wrap(self, text: &str) -> String {
        match self.guard() {
            Some(guard) => format!("if({}) {{ // {}\n{}\n}}", guard, self.comment(), indent(text)),
            None => text.to_string(),
        }
    }
}

/// Decode the condition of an ARM word and wrap `text` in its guard
pub fn conditional(word: u32, address: u32, text: &str) -> Result<String> {
    Ok(Condition::of_word(word, address)?.wrap(text))
}
