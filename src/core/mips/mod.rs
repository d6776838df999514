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

//! MIPS I pipeline
//!
//! Decodes 32-bit MIPS words with a two-level opcode table and translates
//! them into pseudocode, rebuilding branch delay slots on the way.
//!
//! # Register names
//!
//! General purpose registers use their ABI names (`zero`, `at`, `v0`, ...).
//! `zero` reads as the literal `0` and is never declared. Writes to it are
//! kept as commented statements.

mod decode;
mod translate;

#[cfg(test)]
mod tests;

pub use decode::decode;
pub use translate::Translator;

use super::config::TranslatorConfig;
use super::error::{Result, TranslateError};
use super::output::Declarable;
use std::fmt;

/// MIPS registers in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    Zero,
    At,
    V0,
    V1,
    A0,
    A1,
    A2,
    A3,
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    T8,
    T9,
    K0,
    K1,
    Gp,
    Sp,
    Fp,
    Ra,
    /// Multiply/divide result, high word
    Hi,
    /// Multiply/divide result, low word
    Lo,
}

/// General purpose registers indexed by their 5-bit encoding
const GPRS: [Register; 32] = [
    Register::Zero,
    Register::At,
    Register::V0,
    Register::V1,
    Register::A0,
    Register::A1,
    Register::A2,
    Register::A3,
    Register::T0,
    Register::T1,
    Register::T2,
    Register::T3,
    Register::T4,
    Register::T5,
    Register::T6,
    Register::T7,
    Register::S0,
    Register::S1,
    Register::S2,
    Register::S3,
    Register::S4,
    Register::S5,
    Register::S6,
    Register::S7,
    Register::T8,
    Register::T9,
    Register::K0,
    Register::K1,
    Register::Gp,
    Register::Sp,
    Register::Fp,
    Register::Ra,
];

impl Register {
    /// Look up a general purpose register by its encoding
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
}

impl Declarable for Register {
    fn name(self) -> &'static str {
        match self {
            Register::Zero => "zero",
            Register::At => "at",
            Register::V0 => "v0",
            Register::V1 => "v1",
            Register::A0 => "a0",
            Register::A1 => "a1",
            Register::A2 => "a2",
            Register::A3 => "a3",
            Register::T0 => "t0",
            Register::T1 => "t1",
            Register::T2 => "t2",
            Register::T3 => "t3",
            Register::T4 => "t4",
            Register::T5 => "t5",
            Register::T6 => "t6",
            Register::T7 => "t7",
            Register::S0 => "s0",
            Register::S1 => "s1",
            Register::S2 => "s2",
            Register::S3 => "s3",
            Register::S4 => "s4",
            Register::S5 => "s5",
            Register::S6 => "s6",
            Register::S7 => "s7",
            Register::T8 => "t8",
            Register::T9 => "t9",
            Register::K0 => "k0",
            Register::K1 => "k1",
            Register::Gp => "gp",
            Register::Sp => "sp",
            Register::Fp => "fp",
            Register::Ra => "ra",
            Register::Hi => "hi",
            Register::Lo => "lo",
        }
    }

    fn is_hardwired_zero(self) -> bool {
        self == Register::Zero
    }
}

/// MIPS opcodes
///
/// `Nop` stands for the all-zero word. The remaining variants follow the
/// primary (bits 26-31) and, for primary 0, secondary (bits 0-5) fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    // SPECIAL (primary 0x00)
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,
    Jr,
    Jalr,
    Syscall,
    Break,
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    Mult,
    Multu,
    Div,
    Divu,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Sltu,
    // Primary opcodes
    /// BLTZ, BGEZ, BLTZAL, BGEZAL (selected by the rt field)
    Bcondz,
    J,
    Jal,
    Beq,
    Bne,
    Blez,
    Bgtz,
    Addi,
    Addiu,
    Slti,
    Sltiu,
    Andi,
    Ori,
    Xori,
    Lui,
    Cop0,
    Cop2,
    Lb,
    Lh,
    Lwl,
    Lw,
    Lbu,
    Lhu,
    Lwr,
    Sb,
    Sh,
    Swl,
    Sw,
    Swr,
    Lwc0,
    Lwc2,
    Swc0,
    Swc2,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}

/// A decoded MIPS word
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

/// Decode and translate a MIPS instruction stream
///
/// # Arguments
///
/// * `words` - Ordered `(address, word)` pairs
/// * `config` - Translator configuration
///
/// # Returns
///
/// Declarations followed by one text block per address
pub fn translate(words: &[(u32, u32)], config: &TranslatorConfig) -> Result<Vec<String>> {
    let instructions = words
        .iter()
        .map(|&(address, word)| Instruction::new(address, word))
        .collect::<Result<Vec<_>>>()?;

    Translator::new(config).translate(&instructions)
}
