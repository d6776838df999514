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
use crate::core::output::sign_extend;

/// Target of a PC-relative branch: the word offset is counted from the delay
/// slot
#[inline(always)]
fn branch_target(instr: &Instruction) -> u32 {
    let (_, _, _, imm) = decode_i_type(instr.word);
    let offset = sign_extend(imm as u32, 16) << 2;
    instr.address.wrapping_add(4).wrapping_add(offset as u32)
}

impl Translator {
    // === Branch Instructions ===

    /// BLTZ/BGEZ/BLTZAL/BGEZAL: Branch on sign of rs
    ///
    /// Bit 16 selects `>= 0` over `< 0`, bit 20 selects the linking form,
    /// which calls the target instead of jumping to it.
    ///
    /// Format: bltz rs, offset
    /// Output: `if((int)rs < 0) {\n  LAB_...;\n}`
    pub(super) fn op_bcondz(&mut self, instr: &Instruction, rs: Register) -> Emit {
        let (_, _, rt, _) = decode_i_type(instr.word);
        let is_bgez = rt & 0x01 != 0;
        let is_link = rt & 0x1E == 0x10;
        let target = branch_target(instr);

        let guard = format!(
            "(int){} {} 0",
            self.read(rs),
            if is_bgez { ">=" } else { "<" }
        );

        let body = if is_link {
            let function = self.function(target);
            self.call(function)
        } else {
            self.goto(target)
        };

        Emit::Branch { guard, body }
    }

    /// BEQ: Branch on Equal
    ///
    /// `beq zero, zero` is the unconditional `b` pseudo-op.
    ///
    /// Format: beq rs, rt, offset
    pub(super) fn op_beq(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let target = branch_target(instr);

        if rs == Register::Zero && rt == Register::Zero {
            return Emit::Jump(self.goto(target));
        }

        let guard = format!("{} == {}", self.read(rs), self.read(rt));
        let body = self.goto(target);
        Emit::Branch { guard, body }
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    pub(super) fn op_bne(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let target = branch_target(instr);
        let guard = format!("{} != {}", self.read(rs), self.read(rt));
        let body = self.goto(target);
        Emit::Branch { guard, body }
    }

    /// BLEZ: Branch on Less than or Equal to Zero
    ///
    /// Format: blez rs, offset
    pub(super) fn op_blez(&mut self, instr: &Instruction, rs: Register) -> Emit {
        let target = branch_target(instr);
        let guard = format!("(int){} <= 0", self.read(rs));
        let body = self.goto(target);
        Emit::Branch { guard, body }
    }

    /// BGTZ: Branch on Greater Than Zero
    ///
    /// Format: bgtz rs, offset
    pub(super) fn op_bgtz(&mut self, instr: &Instruction, rs: Register) -> Emit {
        let target = branch_target(instr);
        let guard = format!("(int){} > 0", self.read(rs));
        let body = self.goto(target);
        Emit::Branch { guard, body }
    }
}
