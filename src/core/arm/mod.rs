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

//! ARM pipeline
//!
//! Decodes 32-bit ARM-state words (ARMv4T) through an ordered mask/value
//! table and translates them into predicated pseudocode. The register file
//! and register lists are shared with the Thumb pipeline.

mod decode;
pub mod shift;
mod translate;

#[cfg(test)]
mod tests;

pub use decode::decode;
pub use translate::Translator;

use super::config::TranslatorConfig;
use super::error::{Result, TranslateError};
use super::output::Declarable;
use bitflags::bitflags;
use std::fmt;

/// ARM registers in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    /// r13
    Sp,
    /// r14
    Lr,
    /// r15
    Pc,
    Cpsr,
    Spsr,
}

/// Registers indexed by their 4-bit encoding
const GPRS: [Register; 16] = [
    Register::R0,
    Register::R1,
    Register::R2,
    Register::R3,
    Register::R4,
    Register::R5,
    Register::R6,
    Register::R7,
    Register::R8,
    Register::R9,
    Register::R10,
    Register::R11,
    Register::R12,
    Register::Sp,
    Register::Lr,
    Register::Pc,
];

impl Register {
    /// Look up r0-r15 by encoding
    ///
    /// # Arguments
    ///
    /// * `index` - Register field value
    /// * `address` - Address of the instruction, for error reporting
    pub fn from_index(index: u32, address: u32) -> Result<Self> {
        GPRS.get(index as usize)
            .copied()
            .ok_or(TranslateError::InvalidRegister { address, index })
    }

    /// Register in the 4-bit field starting at bit `shift`
    #[inline(always)]
    pub fn field(word: u32, shift: u32, address: u32) -> Result<Self> {
        Self::from_index((word >> shift) & 0xF, address)
    }
}

impl Declarable for Register {
    fn name(self) -> &'static str {
        match self {
            Register::R0 => "r0",
            Register::R1 => "r1",
            Register::R2 => "r2",
            Register::R3 => "r3",
            Register::R4 => "r4",
            Register::R5 => "r5",
            Register::R6 => "r6",
            Register::R7 => "r7",
            Register::R8 => "r8",
            Register::R9 => "r9",
            Register::R10 => "r10",
            Register::R11 => "r11",
            Register::R12 => "r12",
            Register::Sp => "sp",
            Register::Lr => "lr",
            Register::Pc => "pc",
            Register::Cpsr => "cpsr",
            Register::Spsr => "spsr",
        }
    }
}

bitflags! {
    /// Register list of a block transfer, bit N selects rN
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RegisterList: u16 {
        const R0 = 1 << 0;
        const R1 = 1 << 1;
        const R2 = 1 << 2;
        const R3 = 1 << 3;
        const R4 = 1 << 4;
        const R5 = 1 << 5;
        const R6 = 1 << 6;
        const R7 = 1 << 7;
        const R8 = 1 << 8;
        const R9 = 1 << 9;
        const R10 = 1 << 10;
        const R11 = 1 << 11;
        const R12 = 1 << 12;
        const SP = 1 << 13;
        const LR = 1 << 14;
        const PC = 1 << 15;
    }
}

impl RegisterList {
    /// Registers in ascending order
    pub fn registers(self) -> impl DoubleEndedIterator<Item = Register> {
        GPRS.into_iter()
            .enumerate()
            .filter(move |(bit, _)| self.bits() & (1 << bit) != 0)
            .map(|(_, register)| register)
    }

    /// Number of registers in the list
    pub fn len(self) -> u32 {
        self.bits().count_ones()
    }
}

/// ARM opcodes
///
/// The sixteen data-processing operations come first, in encoding order of
/// bits 21-24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    And,
    Eor,
    Sub,
    Rsb,
    Add,
    Adc,
    Sbc,
    Rsc,
    Tst,
    Teq,
    Cmp,
    Cmn,
    Orr,
    Mov,
    Bic,
    Mvn,
    /// MSR with an immediate operand
    MsrImmediate,
    /// MRS, or MSR with a register operand
    PsrRegister,
    /// Branch and exchange
    Bx,
    /// Branch with link and exchange (register)
    Blx,
    /// MUL/MLA
    Multiply,
    /// UMULL/UMLAL/SMULL/SMLAL
    MultiplyLong,
    /// SWP/SWPB
    Swap,
    /// LDRH/STRH/LDRSB/LDRSH with register offset
    HalfwordRegister,
    /// LDRH/STRH/LDRSB/LDRSH with immediate offset
    HalfwordImmediate,
    /// LDR/STR/LDRB/STRB with shifted register offset
    SingleRegister,
    /// LDR/STR/LDRB/STRB with immediate offset
    SingleImmediate,
    /// LDM/STM
    BlockTransfer,
    B,
    Bl,
    Swi,
}

impl Opcode {
    /// Data-processing operations that never write their destination
    pub fn is_compare(self) -> bool {
        matches!(self, Opcode::Tst | Opcode::Teq | Opcode::Cmp | Opcode::Cmn)
    }

    /// Data-processing operations whose carry comes from the shifter
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            Opcode::And
                | Opcode::Eor
                | Opcode::Tst
                | Opcode::Teq
                | Opcode::Orr
                | Opcode::Mov
                | Opcode::Bic
                | Opcode::Mvn
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}

/// A decoded ARM word
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

/// Decode and translate an ARM instruction stream
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
