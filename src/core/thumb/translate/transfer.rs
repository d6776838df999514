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
use crate::core::thumb::{Instruction, Opcode, Register};

/// Memory access of a load or store
enum Access {
    /// Load with the given accessor (`get` or `getSigned`)
    Load(&'static str),
    Store,
}

/// Render `Rd = MEMORY.ref(size, address).get()` or the matching store
fn render(rd: String, size: u32, address: String, access: Access) -> String {
    match access {
        Access::Load(getter) => format!("{} = MEMORY.ref({}, {}).{}();", rd, size, address, getter),
        Access::Store => format!("MEMORY.ref({}, {}).setu({});", size, address, rd),
    }
}

impl Translator {
    /// THUMB6: LDR Rd, [PC, #imm8 * 4]
    ///
    /// The base is the instruction address plus 4 with bit 1 cleared.
    pub(super) fn op_ldr_pc(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 8)?;
        let offset = (instr.word & 0xFF) * 4;
        let address = (instr.address.wrapping_add(4) & !2).wrapping_add(offset);

        Ok(render(rd, 4, format!("0x{:07x}", address), Access::Load("get")))
    }

    /// THUMB7/THUMB8: load/store with register offset
    pub(super) fn op_register_offset(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 0)?;
        let rb = self.low(instr, 3)?;
        let ro = self.low(instr, 6)?;

        let (size, access) = match instr.opcode {
            Opcode::StrRegister => (4, Access::Store),
            Opcode::StrbRegister => (1, Access::Store),
            Opcode::LdrRegister => (4, Access::Load("get")),
            Opcode::LdrbRegister => (1, Access::Load("get")),
            Opcode::StrhRegister => (2, Access::Store),
            Opcode::LdsbRegister => (1, Access::Load("getSigned")),
            Opcode::LdrhRegister => (2, Access::Load("get")),
            _ => (2, Access::Load("getSigned")),
        };

        Ok(render(rd, size, format!("{} + {}", rb, ro), access))
    }

    /// THUMB9/THUMB10: load/store with a scaled 5-bit immediate offset
    pub(super) fn op_immediate_offset(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 0)?;
        let rb = self.low(instr, 3)?;
        let offset = (instr.word >> 6) & 0x1F;

        let (size, access) = match instr.opcode {
            Opcode::StrImmediate => (4, Access::Store),
            Opcode::LdrImmediate => (4, Access::Load("get")),
            Opcode::StrbImmediate => (1, Access::Store),
            Opcode::LdrbImmediate => (1, Access::Load("get")),
            Opcode::StrhImmediate => (2, Access::Store),
            _ => (2, Access::Load("get")),
        };

        Ok(render(rd, size, offset_address(&rb, offset * size), access))
    }

    /// THUMB11: load/store SP-relative
    pub(super) fn op_sp_relative(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 8)?;
        let sp = self.reg(Register::Sp);
        let offset = (instr.word & 0xFF) * 4;

        let access = if instr.opcode == Opcode::LdrSp {
            Access::Load("get")
        } else {
            Access::Store
        };

        Ok(render(rd, 4, offset_address(&sp, offset), access))
    }
}
