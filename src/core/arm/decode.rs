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

/// Data-processing operations indexed by bits 21-24
const DATA_PROCESSING: [Opcode; 16] = [
    Opcode::And,
    Opcode::Eor,
    Opcode::Sub,
    Opcode::Rsb,
    Opcode::Add,
    Opcode::Adc,
    Opcode::Sbc,
    Opcode::Rsc,
    Opcode::Tst,
    Opcode::Teq,
    Opcode::Cmp,
    Opcode::Cmn,
    Opcode::Orr,
    Opcode::Mov,
    Opcode::Bic,
    Opcode::Mvn,
];

/// Opcode of a data-processing word
#[inline(always)]
fn data_processing(word: u32) -> Option<Opcode> {
    Some(DATA_PROCESSING[((word >> 21) & 0xF) as usize])
}

/// ARM decode table
///
/// Several encodings are subsets of broader ones (BX lives inside the
/// data-processing space, SWP inside the halfword-transfer space), so the
/// narrow patterns come first.
const PATTERNS: &[Pattern<Opcode>] = &[
    Pattern {
        mask: 0x0FFF_FFD0,
        expected: 0x012F_FF10,
        classify: |word| Some(if word & 0x20 != 0 { Opcode::Blx } else { Opcode::Bx }),
    },
    Pattern {
        mask: 0x0FC0_00F0,
        expected: 0x0000_0090,
        classify: |_| Some(Opcode::Multiply),
    },
    Pattern {
        mask: 0x0F80_00F0,
        expected: 0x0080_0090,
        classify: |_| Some(Opcode::MultiplyLong),
    },
    Pattern {
        mask: 0x0FB0_0FF0,
        expected: 0x0100_0090,
        classify: |_| Some(Opcode::Swap),
    },
    Pattern {
        mask: 0x0E40_0F90,
        expected: 0x0000_0090,
        classify: |_| Some(Opcode::HalfwordRegister),
    },
    Pattern {
        mask: 0x0E40_0090,
        expected: 0x0040_0090,
        classify: |_| Some(Opcode::HalfwordImmediate),
    },
    Pattern {
        mask: 0x0E00_0010,
        expected: 0x0600_0000,
        classify: |_| Some(Opcode::SingleRegister),
    },
    Pattern {
        mask: 0x0E00_0000,
        expected: 0x0400_0000,
        classify: |_| Some(Opcode::SingleImmediate),
    },
    Pattern {
        mask: 0x0FB0_0000,
        expected: 0x0320_0000,
        classify: |_| Some(Opcode::MsrImmediate),
    },
    Pattern {
        mask: 0x0F90_0000,
        expected: 0x0100_0000,
        classify: |_| Some(Opcode::PsrRegister),
    },
    Pattern {
        mask: 0x0E00_0000,
        expected: 0x0800_0000,
        classify: |_| Some(Opcode::BlockTransfer),
    },
    Pattern {
        mask: 0x0F00_0000,
        expected: 0x0A00_0000,
        classify: |_| Some(Opcode::B),
    },
    Pattern {
        mask: 0x0F00_0000,
        expected: 0x0B00_0000,
        classify: |_| Some(Opcode::Bl),
    },
    Pattern {
        mask: 0x0F00_0000,
        expected: 0x0F00_0000,
        classify: |_| Some(Opcode::Swi),
    },
    // Data processing: register shifted by register
    Pattern {
        mask: 0x0E00_0090,
        expected: 0x0000_0010,
        classify: data_processing,
    },
    // Data processing: register shifted by immediate
    Pattern {
        mask: 0x0E00_0010,
        expected: 0x0000_0000,
        classify: data_processing,
    },
    // Data processing: rotated immediate
    Pattern {
        mask: 0x0E00_0000,
        expected: 0x0200_0000,
        classify: data_processing,
    },
];

/// Decode an ARM word
///
/// The condition field is not inspected here, it is checked when the
/// instruction is translated.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction
/// * `address` - Address of the instruction, for error reporting
///
/// # Returns
///
/// - `Ok(Opcode)` for the first matching pattern
/// - `Err(TranslateError::Decode)` when nothing matches (coprocessor space,
///   undefined media encodings)
pub fn decode(word: u32, address: u32) -> Result<Opcode> {
    first_match(PATTERNS, word).ok_or(TranslateError::Decode { address, word })
}

/// Whether a data-processing word has an immediate operand (bit 25)
#[inline(always)]
pub(super) fn is_immediate(word: u32) -> bool {
    word & (1 << 25) != 0
}

/// Whether the S bit (bit 20) is set
#[inline(always)]
pub(super) fn sets_flags(word: u32) -> bool {
    word & (1 << 20) != 0
}

/// Decode the shifter fields of a register operand
///
/// Format: | shift (5) or Rs (4) 0 | type (2) | R | Rm (4) |
///
/// # Returns
///
/// Tuple of (amount or Rs, shift type, register-specified, Rm)
#[inline(always)]
pub(super) fn decode_shifter(word: u32) -> (u32, u32, bool, u32) {
    let register_shift = word & 0x10 != 0;
    let amount = if register_shift {
        (word >> 8) & 0xF
    } else {
        (word >> 7) & 0x1F
    };
    let kind = (word >> 5) & 0x3;
    let rm = word & 0xF;
    (amount, kind, register_shift, rm)
}

/// Decode a rotated 8-bit immediate
///
/// # Returns
///
/// Tuple of (value, rotation in bits)
#[inline(always)]
pub(super) fn decode_rotated_immediate(word: u32) -> (u32, u32) {
    let rotation = ((word >> 8) & 0xF) * 2;
    ((word & 0xFF).rotate_right(rotation), rotation)
}
