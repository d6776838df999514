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

use super::Translator;
use crate::core::condition::Condition;
use crate::core::error::Result;
use crate::core::output::sign_extend;
use crate::core::thumb::{Instruction, Opcode, Register};

impl Translator {
    /// THUMB16: B<cond> with a signed 8-bit half-word offset
    pub(super) fn op_branch_conditional(&mut self, instr: &Instruction) -> Result<String> {
        let condition = Condition::from_bits((instr.word >> 8) & 0xF, instr.address)?;
        let offset = sign_extend(instr.word & 0xFF, 8) * 2;
        let target = instr.address.wrapping_add(4).wrapping_add(offset as u32);

        let text = self.goto(target);
        Ok(condition.wrap(&text))
    }

    /// THUMB17: SWI #imm8
    pub(super) fn op_swi(&mut self, instr: &Instruction) -> String {
        format!(
            "{} = 0x{:x};\n{} = CPU.SWI(InstructionSet.THUMB); // 0x{:x}",
            self.reg(Register::Pc),
            instr.address.wrapping_add(2),
            self.reg(Register::R0),
            instr.word & 0xFF
        )
    }

    /// THUMB18: B with a signed 11-bit half-word offset
    pub(super) fn op_b(&mut self, instr: &Instruction) -> String {
        let offset = sign_extend(instr.word & 0x7FF, 11) * 2;
        self.goto(instr.address.wrapping_add(4).wrapping_add(offset as u32))
    }

    /// THUMB19: BL/BLX pair
    ///
    /// The prefix supplies offset bits 12-22, the suffix bits 1-11. A BLX
    /// target is word aligned since it lands in ARM state.
    pub(super) fn op_long_branch(&mut self, instr: &Instruction) -> String {
        let high = instr.word & 0x7FF;
        let low = (instr.word >> 16) & 0x7FF;
        let offset = sign_extend((high << 12) | (low << 1), 23);

        let mut target = instr.address.wrapping_add(4).wrapping_add(offset as u32);
        if instr.opcode == Opcode::Blx {
            target &= !3;
        }

        self.goto(target)
    }
}
