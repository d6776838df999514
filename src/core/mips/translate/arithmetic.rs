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
use super::super::decode::decode_i_type;
use super::super::{Instruction, Register};
use super::{Emit, Translator};
use crate::core::output::{sign_extend, signed_hex};

impl Translator {
    // === Arithmetic Instructions ===

    /// ADD/ADDU: Add
    ///
    /// The overflow trap of ADD is not modelled, both render the same.
    /// Adding `zero` collapses to a move.
    ///
    /// Format: addu rd, rs, rt
    /// Output: `rd = rs + rt;`
    pub(super) fn op_addu(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = match (rs, rt) {
            (Register::Zero, other) | (other, Register::Zero) => self.read(other),
            _ => format!("{} + {}", self.read(rs), self.read(rt)),
        };
        Emit::Plain(self.assign(rd, value))
    }

    /// SUB/SUBU: Subtract
    ///
    /// Format: subu rd, rs, rt
    /// Output: `rd = rs - rt;`
    pub(super) fn op_subu(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} - {}", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs, rt
    /// Output: `rd = (int)rs < (int)rt;`
    pub(super) fn op_slt(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("(int){} < (int){}", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs, rt
    /// Output: `rd = rs < rt;`
    pub(super) fn op_sltu(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} < {}", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// ADDI/ADDIU: Add Immediate
    ///
    /// The immediate is sign-extended. With `zero` as the source this is the
    /// `li` pseudo-op and renders as a plain constant.
    ///
    /// Format: addiu rt, rs, imm
    /// Output: `rt = rs + 0x10L;`, `rt = rs + -0x10L;` or `rt = 0x10L;`
    pub(super) fn op_addiu(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let imm = signed_hex(sign_extend(imm as u32, 16) as i64);

        let value = if rs == Register::Zero {
            format!("{}L", imm)
        } else {
            format!("{} + {}L", self.read(rs), imm)
        };
        Emit::Plain(self.assign(rt, value))
    }

    /// SLTI: Set on Less Than Immediate (signed)
    ///
    /// Format: slti rt, rs, imm
    /// Output: `rt = (int)rs < -0x1L;`
    pub(super) fn op_slti(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let imm = signed_hex(sign_extend(imm as u32, 16) as i64);

        let value = format!("(int){} < {}L", self.read(rs), imm);
        Emit::Plain(self.assign(rt, value))
    }

    /// SLTIU: Set on Less Than Immediate Unsigned
    ///
    /// The immediate is sign-extended first, then compared as unsigned, so
    /// `0xFFFF` compares against `0xffffffff`.
    ///
    /// Format: sltiu rt, rs, imm
    /// Output: `rt = rs < 0xffffffffL;`
    pub(super) fn op_sltiu(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let imm = sign_extend(imm as u32, 16) as u32;

        let value = format!("{} < 0x{:x}L", self.read(rs), imm);
        Emit::Plain(self.assign(rt, value))
    }
}
