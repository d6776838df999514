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

use super::Opcode;
use crate::core::error::{Result, TranslateError};
use crate::core::pattern::{first_match, Pattern};

/// THUMB4 operations indexed by bits 6-9
pub(super) const ALU: [Opcode; 16] = [
    Opcode::And,
    Opcode::Eor,
    Opcode::LslRegister,
    Opcode::LsrRegister,
    Opcode::AsrRegister,
    Opcode::Adc,
    Opcode::Sbc,
    Opcode::Ror,
    Opcode::Tst,
    Opcode::Neg,
    Opcode::Cmp,
    Opcode::Cmn,
    Opcode::Orr,
    Opcode::Mul,
    Opcode::Bic,
    Opcode::Mvn,
];

/// Two-bit subfield at `shift`, used to index the small per-format tables
#[inline(always)]
fn select(word: u32, shift: u32, table: [Opcode; 4]) -> Option<Opcode> {
    Some(table[((word >> shift) & 0x3) as usize])
}

/// One-bit subfield at `shift`
#[inline(always)]
fn either(word: u32, shift: u32, clear: Opcode, set: Opcode) -> Option<Opcode> {
    Some(if word & (1 << shift) != 0 { set } else { clear })
}

/// Thumb decode table for 16-bit words
///
/// THUMB2 sits inside the THUMB1 space (shift type 3) and THUMB17 inside the
/// THUMB16 space (condition 0xF), so both come before their containers.
const PATTERNS: &[Pattern<Opcode>] = &[
    // THUMB2
    Pattern {
        mask: 0xF800,
        expected: 0x1800,
        classify: |word| {
            select(
                word,
                9,
                [
                    Opcode::AddRegister,
                    Opcode::SubRegister,
                    Opcode::AddImmediate3,
                    Opcode::SubImmediate3,
                ],
            )
        },
    },
    // THUMB1
    Pattern {
        mask: 0xE000,
        expected: 0x0000,
        classify: |word| match (word >> 11) & 0x3 {
            0 => Some(Opcode::Lsl),
            1 => Some(Opcode::Lsr),
            2 => Some(Opcode::Asr),
            _ => None,
        },
    },
    // THUMB3
    Pattern {
        mask: 0xE000,
        expected: 0x2000,
        classify: |word| {
            select(
                word,
                11,
                [
                    Opcode::MovImmediate,
                    Opcode::CmpImmediate,
                    Opcode::AddImmediate,
                    Opcode::SubImmediate,
                ],
            )
        },
    },
    // THUMB4
    Pattern {
        mask: 0xFC00,
        expected: 0x4000,
        classify: |word| Some(ALU[((word >> 6) & 0xF) as usize]),
    },
    // THUMB5
    Pattern {
        mask: 0xFC00,
        expected: 0x4400,
        classify: |word| select(word, 8, [Opcode::AddHi, Opcode::CmpHi, Opcode::MovHi, Opcode::Bx]),
    },
    // THUMB6
    Pattern {
        mask: 0xF800,
        expected: 0x4800,
        classify: |_| Some(Opcode::LdrPc),
    },
    // THUMB7 and THUMB8, split on bit 9
    Pattern {
        mask: 0xF000,
        expected: 0x5000,
        classify: |word| {
            let table = if word & 0x200 == 0 {
                [
                    Opcode::StrRegister,
                    Opcode::StrbRegister,
                    Opcode::LdrRegister,
                    Opcode::LdrbRegister,
                ]
            } else {
                [
                    Opcode::StrhRegister,
                    Opcode::LdsbRegister,
                    Opcode::LdrhRegister,
                    Opcode::LdshRegister,
                ]
            };
            select(word, 10, table)
        },
    },
    // THUMB9
    Pattern {
        mask: 0xE000,
        expected: 0x6000,
        classify: |word| {
            select(
                word,
                11,
                [
                    Opcode::StrImmediate,
                    Opcode::LdrImmediate,
                    Opcode::StrbImmediate,
                    Opcode::LdrbImmediate,
                ],
            )
        },
    },
    // THUMB10
    Pattern {
        mask: 0xF000,
        expected: 0x8000,
        classify: |word| either(word, 11, Opcode::StrhImmediate, Opcode::LdrhImmediate),
    },
    // THUMB11
    Pattern {
        mask: 0xF000,
        expected: 0x9000,
        classify: |word| either(word, 11, Opcode::StrSp, Opcode::LdrSp),
    },
    // THUMB12
    Pattern {
        mask: 0xF000,
        expected: 0xA000,
        classify: |_| Some(Opcode::Address),
    },
    // THUMB13
    Pattern {
        mask: 0xFF00,
        expected: 0xB000,
        classify: |_| Some(Opcode::AddSp),
    },
    // THUMB14
    Pattern {
        mask: 0xF600,
        expected: 0xB400,
        classify: |word| either(word, 11, Opcode::Push, Opcode::Pop),
    },
    // THUMB15
    Pattern {
        mask: 0xF000,
        expected: 0xC000,
        classify: |word| either(word, 11, Opcode::Stmia, Opcode::Ldmia),
    },
    // THUMB17
    Pattern {
        mask: 0xFF00,
        expected: 0xDF00,
        classify: |_| Some(Opcode::Swi),
    },
    // THUMB16, condition 0xE is undefined
    Pattern {
        mask: 0xF000,
        expected: 0xD000,
        classify: |word| (word & 0x0F00 != 0x0E00).then_some(Opcode::BranchConditional),
    },
    // THUMB18
    Pattern {
        mask: 0xF800,
        expected: 0xE000,
        classify: |_| Some(Opcode::B),
    },
];

/// Decode a Thumb word
///
/// # Arguments
///
/// * `word` - A 16-bit instruction, or a BL/BLX pair with the prefix in the
///   low half-word
/// * `address` - Address of the instruction, for error reporting
///
/// # Returns
///
/// - `Ok(Opcode)` for a known format
/// - `Err(TranslateError::Decode)` otherwise, including a 32-bit word whose
///   halves are not a BL prefix/suffix pair
pub fn decode(word: u32, address: u32) -> Result<Opcode> {
    let opcode = if word > 0xFFFF {
        long_branch(word)
    } else {
        first_match(PATTERNS, word)
    };

    opcode.ok_or(TranslateError::Decode { address, word })
}

/// THUMB19: prefix `11110` in the low half, suffix `111x1` in the high half
fn long_branch(word: u32) -> Option<Opcode> {
    let prefix = word & 0xFFFF;
    let suffix = word >> 16;

    if prefix & 0xF800 != 0xF000 || suffix & 0xE800 != 0xE800 {
        return None;
    }

    either(suffix, 12, Opcode::Blx, Opcode::Bl)
}

/// Low register (r0-r7) field at `shift`
#[inline(always)]
pub(super) fn low_register(word: u32, shift: u32) -> u32 {
    (word >> shift) & 0x7
}

/// THUMB5 register fields extended with the H1/H2 bits
///
/// # Returns
///
/// Tuple of (Rd/Hd, Rs/Hs)
#[inline(always)]
pub(super) fn decode_hi_registers(word: u32) -> (u32, u32) {
    let rd = (word & 0x7) | ((word >> 4) & 0x8);
    let rs = (word >> 3) & 0xF;
    (rd, rs)
}
