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

/// Opcodes indexed by the primary field (bits 26-31)
///
/// Entry 0x00 is unused: SPECIAL words go through [`SECONDARY`].
const PRIMARY: [Option<Opcode>; 64] = primary_table();

/// SPECIAL opcodes indexed by the secondary field (bits 0-5)
const SECONDARY: [Option<Opcode>; 64] = secondary_table();

const fn primary_table() -> [Option<Opcode>; 64] {
    let mut table = [None; 64];
    table[0x01] = Some(Opcode::Bcondz);
    table[0x02] = Some(Opcode::J);
    table[0x03] = Some(Opcode::Jal);
    table[0x04] = Some(Opcode::Beq);
    table[0x05] = Some(Opcode::Bne);
    table[0x06] = Some(Opcode::Blez);
    table[0x07] = Some(Opcode::Bgtz);
    table[0x08] = Some(Opcode::Addi);
    table[0x09] = Some(Opcode::Addiu);
    table[0x0A] = Some(Opcode::Slti);
    table[0x0B] = Some(Opcode::Sltiu);
    table[0x0C] = Some(Opcode::Andi);
    table[0x0D] = Some(Opcode::Ori);
    table[0x0E] = Some(Opcode::Xori);
    table[0x0F] = Some(Opcode::Lui);
    table[0x10] = Some(Opcode::Cop0);
    table[0x12] = Some(Opcode::Cop2);
    table[0x20] = Some(Opcode::Lb);
    table[0x21] = Some(Opcode::Lh);
    table[0x22] = Some(Opcode::Lwl);
    table[0x23] = Some(Opcode::Lw);
    table[0x24] = Some(Opcode::Lbu);
    table[0x25] = Some(Opcode::Lhu);
    table[0x26] = Some(Opcode::Lwr);
    table[0x28] = Some(Opcode::Sb);
    table[0x29] = Some(Opcode::Sh);
    table[0x2A] = Some(Opcode::Swl);
    table[0x2B] = Some(Opcode::Sw);
    table[0x2E] = Some(Opcode::Swr);
    table[0x30] = Some(Opcode::Lwc0);
    table[0x32] = Some(Opcode::Lwc2);
    table[0x38] = Some(Opcode::Swc0);
    table[0x3A] = Some(Opcode::Swc2);
    table
}

const fn secondary_table() -> [Option<Opcode>; 64] {
    let mut table = [None; 64];
    table[0x00] = Some(Opcode::Sll);
    table[0x02] = Some(Opcode::Srl);
    table[0x03] = Some(Opcode::Sra);
    table[0x04] = Some(Opcode::Sllv);
    table[0x06] = Some(Opcode::Srlv);
    table[0x07] = Some(Opcode::Srav);
    table[0x08] = Some(Opcode::Jr);
    table[0x09] = Some(Opcode::Jalr);
    table[0x0C] = Some(Opcode::Syscall);
    table[0x0D] = Some(Opcode::Break);
    table[0x10] = Some(Opcode::Mfhi);
    table[0x11] = Some(Opcode::Mthi);
    table[0x12] = Some(Opcode::Mflo);
    table[0x13] = Some(Opcode::Mtlo);
    table[0x18] = Some(Opcode::Mult);
    table[0x19] = Some(Opcode::Multu);
    table[0x1A] = Some(Opcode::Div);
    table[0x1B] = Some(Opcode::Divu);
    table[0x20] = Some(Opcode::Add);
    table[0x21] = Some(Opcode::Addu);
    table[0x22] = Some(Opcode::Sub);
    table[0x23] = Some(Opcode::Subu);
    table[0x24] = Some(Opcode::And);
    table[0x25] = Some(Opcode::Or);
    table[0x26] = Some(Opcode::Xor);
    table[0x27] = Some(Opcode::Nor);
    table[0x2A] = Some(Opcode::Slt);
    table[0x2B] = Some(Opcode::Sltu);
    table
}

/// Decode a MIPS word
///
/// The all-zero word is the canonical no-op. Any other word is looked up by
/// its primary field, and SPECIAL words (primary 0) by their secondary field.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction
/// * `address` - Address of the instruction, for error reporting
///
/// # Returns
///
/// - `Ok(Opcode)` when the fields name a known opcode
/// - `Err(TranslateError::Decode)` otherwise
pub fn decode(word: u32, address: u32) -> Result<Opcode> {
    if word == 0 {
        return Ok(Opcode::Nop);
    }

    let (op, _) = decode_j_type(word);
    let opcode = if op == 0 {
        let (_, _, _, _, funct) = decode_r_type(word);
        SECONDARY[funct as usize]
    } else {
        PRIMARY[op as usize]
    };

    opcode.ok_or(TranslateError::Decode { address, word })
}

/// Decode R-type instruction
///
/// R-type instructions are used for register-to-register operations.
///
/// Format: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
///
/// # Returns
///
/// Tuple of (rs, rt, rd, shamt, funct)
#[inline(always)]
pub(super) fn decode_r_type(instr: u32) -> (u8, u8, u8, u8, u8) {
    let rs = ((instr >> 21) & 0x1F) as u8;
    let rt = ((instr >> 16) & 0x1F) as u8;
    let rd = ((instr >> 11) & 0x1F) as u8;
    let shamt = ((instr >> 6) & 0x1F) as u8;
    let funct = (instr & 0x3F) as u8;
    (rs, rt, rd, shamt, funct)
}

/// Decode I-type instruction
///
/// Format: | op (6) | rs (5) | rt (5) | immediate (16) |
///
/// # Returns
///
/// Tuple of (op, rs, rt, imm)
#[inline(always)]
pub(super) fn decode_i_type(instr: u32) -> (u8, u8, u8, u16) {
    let op = ((instr >> 26) & 0x3F) as u8;
    let rs = ((instr >> 21) & 0x1F) as u8;
    let rt = ((instr >> 16) & 0x1F) as u8;
    let imm = (instr & 0xFFFF) as u16;
    (op, rs, rt, imm)
}

/// Decode J-type instruction
///
/// Format: | op (6) | target (26) |
///
/// # Returns
///
/// Tuple of (op, target)
#[inline(always)]
pub(super) fn decode_j_type(instr: u32) -> (u8, u32) {
    let op = ((instr >> 26) & 0x3F) as u8;
    let target = instr & 0x03FF_FFFF;
    (op, target)
}
