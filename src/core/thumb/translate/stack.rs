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

use super::{offset_address, Translator};
use crate::core::error::Result;
use crate::core::thumb::{Instruction, Opcode, Register, RegisterList};

/// Low-register list in bits 0-7
#[inline(always)]
fn register_list(word: u32) -> RegisterList {
    RegisterList::from_bits_retain((word & 0xFF) as u16)
}

impl Translator {
    /// THUMB12: ADD Rd, PC/SP, #imm8 * 4
    pub(super) fn op_address(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 8)?;
        let offset = (instr.word & 0xFF) * 4;

        if instr.word & (1 << 11) != 0 {
            let sp = self.reg(Register::Sp);
            return Ok(format!("{} = {};", rd, offset_address(&sp, offset)));
        }

        let address = (instr.address.wrapping_add(4) & !2).wrapping_add(offset);
        Ok(format!("{} = 0x{:07x};", rd, address))
    }

    /// THUMB13: ADD SP, #+/-imm7 * 4
    pub(super) fn op_add_sp(&mut self, instr: &Instruction) -> String {
        let sp = self.reg(Register::Sp);
        let offset = (instr.word & 0x7F) * 4;
        let operator = if instr.word & 0x80 != 0 { "-=" } else { "+=" };

        format!("{} {} 0x{:x};", sp, operator, offset)
    }

    /// THUMB14: PUSH {Rlist, LR}
    ///
    /// LR is pushed first, then the list from the highest register down, so
    /// the lowest register ends at the lowest address.
    pub(super) fn op_push(&mut self, instr: &Instruction) -> Result<String> {
        let mut lines = Vec::new();
        if instr.word & 0x100 != 0 {
            lines.push(format!("CPU.push({});", self.reg(Register::Lr)));
        }
        for register in register_list(instr.word).registers().rev() {
            lines.push(format!("CPU.push({});", self.reg(register)));
        }

        Ok(lines.join("\n"))
    }

    /// THUMB14: POP {Rlist, PC}
    pub(super) fn op_pop(&mut self, instr: &Instruction) -> Result<String> {
        let mut lines = Vec::new();
        for register in register_list(instr.word).registers() {
            lines.push(format!("{} = CPU.pop();", self.reg(register)));
        }
        if instr.word & 0x100 != 0 {
            lines.push(format!("{} = CPU.pop();", self.reg(Register::Pc)));
        }

        Ok(lines.join("\n"))
    }

    /// THUMB15: STMIA/LDMIA Rb!, {Rlist}
    ///
    /// The transfers walk a scratch address so the base keeps its value
    /// until write-back. A load that includes the base skips the write-back.
    pub(super) fn op_multiple(&mut self, instr: &Instruction) -> Result<String> {
        let rb = Register::from_index((instr.word >> 8) & 0x7, instr.address)?;
        let base = self.reg(rb);
        let load = instr.opcode == Opcode::Ldmia;
        let list = register_list(instr.word);
        let var = format!("address{:x}", instr.address);

        let mut lines = vec![format!("int {} = {};", var, base)];
        for register in list.registers() {
            let register = self.reg(register);
            if load {
                lines.push(format!("{} = MEMORY.ref(4, {}).get();", register, var));
            } else {
                lines.push(format!("MEMORY.ref(4, {}).setu({});", var, register));
            }
            lines.push(format!("{} += 0x4;", var));
        }

        if !(load && list.registers().any(|register| register == rb)) {
            lines.push(format!("{} = {};", base, var));
        }

        Ok(lines.join("\n"))
    }
}
