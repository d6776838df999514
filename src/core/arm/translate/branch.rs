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
use crate::core::arm::{Instruction, Register};
use crate::core::error::Result;
use crate::core::output::sign_extend;

/// Destination of B/BL: address + 8 + offset * 4
#[inline(always)]
fn branch_target(instr: &Instruction) -> u32 {
    let offset = sign_extend(instr.word & 0x00FF_FFFF, 24) << 2;
    instr.address.wrapping_add(8).wrapping_add(offset as u32)
}

impl Translator {
    /// B: local label when in range, call otherwise
    pub(super) fn op_b(&mut self, instr: &Instruction) -> Result<String> {
        Ok(self.goto(branch_target(instr)))
    }

    /// BL: always a call
    pub(super) fn op_bl(&mut self, instr: &Instruction) -> Result<String> {
        let function = self.function(branch_target(instr));
        Ok(self.call(&function))
    }

    /// BX: `bx lr` returns, any other register is an indirect call
    pub(super) fn op_bx(&mut self, instr: &Instruction) -> Result<String> {
        let rm = Register::field(instr.word, 0, instr.address)?;
        if rm == Register::Lr {
            return Ok(format!("return {};", self.reg(Register::R0)));
        }
        self.op_blx(instr)
    }

    /// BLX (register)
    pub(super) fn op_blx(&mut self, instr: &Instruction) -> Result<String> {
        let rm = Register::field(instr.word, 0, instr.address)?;
        let rm = self.reg(rm);
        Ok(format!("{} = MEMORY.call({});", self.reg(Register::R0), rm))
    }

    /// SWI: sets the return address and enters the supervisor call
    pub(super) fn op_swi(&mut self, instr: &Instruction) -> String {
        format!(
            "{} = 0x{:x};\n{} = CPU.SWI(InstructionSet.ARM); // 0x{:x}",
            self.reg(Register::Pc),
            instr.address.wrapping_add(4),
            self.reg(Register::R0),
            instr.word & 0x00FF_FFFF
        )
    }
}
