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

//! Thumb pipeline
//!
//! Decodes the 16-bit Thumb formats (THUMB1-THUMB18) and the 32-bit long
//! branch with link (THUMB19), then translates them into pseudocode. Thumb
//! shares the ARM register file, so [`Register`] and [`RegisterList`] are the
//! ARM types.
//!
//! A word above `0xFFFF` is a long branch: the low half-word is the
//! `BL` prefix carrying the upper offset bits, the high half-word is the
//! suffix selecting `BL` or `BLX`.

mod decode;
mod translate;

#[cfg(test)]
mod tests;

pub use super::arm::{Register, RegisterList};
pub use decode::decode;
pub use translate::Translator;

use super::config::TranslatorConfig;
use super::error::Result;
use std::fmt;

/// Thumb opcodes, grouped by format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // THUMB1: move shifted register
    Lsl,
    Lsr,
    Asr,
    // THUMB2: add/subtract
    AddRegister,
    SubRegister,
    AddImmediate3,
    SubImmediate3,
    // THUMB3: move/compare/add/subtract immediate
    MovImmediate,
    CmpImmediate,
    AddImmediate,
    SubImmediate,
    // THUMB4: ALU operations
    And,
    Eor,
    LslRegister,
    LsrRegister,
    AsrRegister,
    Adc,
    Sbc,
    Ror,
    Tst,
    Neg,
    Cmp,
    Cmn,
    Orr,
    Mul,
    Bic,
    Mvn,
    // THUMB5: hi register operations and branch exchange
    AddHi,
    CmpHi,
    MovHi,
    Bx,
    // THUMB6: PC-relative load
    LdrPc,
    // THUMB7: load/store with register offset
    StrRegister,
    StrbRegister,
    LdrRegister,
    LdrbRegister,
    // THUMB8: load/store sign-extended byte/halfword
    StrhRegister,
    LdsbRegister,
    LdrhRegister,
    LdshRegister,
    // THUMB9: load/store with immediate offset
    StrImmediate,
    LdrImmediate,
    StrbImmediate,
    LdrbImmediate,
    // THUMB10: load/store halfword
    StrhImmediate,
    LdrhImmediate,
    // THUMB11: SP-relative load/store
    StrSp,
    LdrSp,
    /// THUMB12: load address from PC or SP
    Address,
    /// THUMB13: add offset to SP
    AddSp,
    // THUMB14: push/pop
    Push,
    Pop,
    // THUMB15: multiple load/store
    Stmia,
    Ldmia,
    /// THUMB16: conditional branch, condition in bits 8-11
    BranchConditional,
    /// THUMB17: software interrupt
    Swi,
    /// THUMB18: unconditional branch
    B,
    /// THUMB19: long branch with link
    Bl,
    /// THUMB19: long branch with link and exchange to ARM
    Blx,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}

/// A decoded Thumb instruction (16-bit, or 32-bit for BL/BLX)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub address: u32,
    pub word: u32,
    pub opcode: Opcode,
}

impl Instruction {
    /// Decode `word` found at `address`
    pub fn new(address: u32, word: u32) -> Result<Self> {
        Ok(Self {
            address,
            word,
            opcode: decode(word, address)?,
        })
    }
}

/// Decode and translate a Thumb instruction stream
///
/// # Arguments
///
/// * `words` - Ordered `(address, word)` pairs
/// * `config` - Translator configuration
pub fn translate(words: &[(u32, u32)], config: &TranslatorConfig) -> Result<Vec<String>> {
    let instructions = words
        .iter()
        .map(|&(address, word)| Instruction::new(address, word))
        .collect::<Result<Vec<_>>>()?;

    Translator::new(config).translate(&instructions)
}
