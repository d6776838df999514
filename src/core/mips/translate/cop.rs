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
use super::super::decode::{decode_i_type, decode_r_type};
use super::super::{Instruction, Register};
use super::{Emit, Translator};
use crate::core::output::{sign_extend, signed_hex};

impl Translator {
    // === Coprocessor Instructions ===

    /// COP0: System control coprocessor
    ///
    /// MFC0, MTC0 and RFE are translated. Other COP0 forms get the
    /// unsupported placeholder.
    ///
    /// Output: `rt = CPU.MFC0(12);`, `CPU.MTC0(rt, 12);`, `CPU.RFE();`
    pub(super) fn op_cop0(&mut self, instr: &Instruction, rt: Register) -> Emit {
        let (rs, _, rd, _, funct) = decode_r_type(instr.word);

        match rs {
            0x00 => Emit::Plain(self.assign(rt, format!("CPU.MFC0({})", rd))),
            0x04 => Emit::Plain(format!("CPU.MTC0({}, {});", self.read(rt), rd)),
            0x10 if funct == 0x10 => Emit::Plain("CPU.RFE();".to_string()),
            _ => self.unsupported(instr),
        }
    }

    /// COP2: Geometry transformation engine
    ///
    /// Register transfers name the coprocessor register by number. Any word
    /// with bit 25 set is a GTE command and passes its 25-bit command field.
    ///
    /// Output: `rt = CPU.MFC2(9);`, `CPU.CTC2(rt, 31);`, `CPU.COP2(0x180001L);`
    pub(super) fn op_cop2(&mut self, instr: &Instruction, rt: Register) -> Emit {
        let (rs, _, rd, _, _) = decode_r_type(instr.word);

        let text = match rs {
            0x00 => self.assign(rt, format!("CPU.MFC2({})", rd)),
            0x02 => self.assign(rt, format!("CPU.CFC2({})", rd)),
            0x04 => format!("CPU.MTC2({}, {});", self.read(rt), rd),
            0x06 => format!("CPU.CTC2({}, {});", self.read(rt), rd),
            _ => format!("CPU.COP2(0x{:x}L);", instr.word & 0x01FF_FFFF),
        };
        Emit::Plain(text)
    }

    /// LWC2: Load word into a GTE data register
    ///
    /// The rt field names a coprocessor register, not a GPR.
    ///
    /// Output: `CPU.MTC2(MEMORY.ref(4, rs).offset(0x4L).get(), 9);`
    pub(super) fn op_lwc2(&mut self, instr: &Instruction, rs: Register) -> Emit {
        let (_, _, cop_reg, imm) = decode_i_type(instr.word);
        Emit::Plain(format!(
            "CPU.MTC2(MEMORY.ref(4, {}).offset({}L).get(), {});",
            self.read(rs),
            signed_hex(sign_extend(imm as u32, 16) as i64),
            cop_reg
        ))
    }

    /// SWC2: Store word from a GTE data register
    ///
    /// Output: `MEMORY.ref(4, rs).offset(0x4L).setu(CPU.MFC2(9));`
    pub(super) fn op_swc2(&mut self, instr: &Instruction, rs: Register) -> Emit {
        let (_, _, cop_reg, imm) = decode_i_type(instr.word);
        Emit::Plain(format!(
            "MEMORY.ref(4, {}).offset({}L).setu(CPU.MFC2({}));",
            self.read(rs),
            signed_hex(sign_extend(imm as u32, 16) as i64),
            cop_reg
        ))
    }
}
