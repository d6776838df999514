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
use crate::core::error::Result;
use crate::core::thumb::{Instruction, Opcode};

/// THUMB4 helper names indexed by bits 6-9
const ALU_HELPERS: [&str; 16] = [
    "and", "eor", "lsl", "lsr", "asr", "adc", "sbc", "ror", "tst", "neg", "cmp", "cmn", "orr",
    "mul", "bic", "mvn",
];

impl Translator {
    /// THUMB1: LSL/LSR/ASR Rd, Rs, #offset
    ///
    /// An offset of 0 means 32 for LSR and ASR.
    pub(super) fn op_shift_immediate(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 0)?;
        let rs = self.low(instr, 3)?;
        let offset = (instr.word >> 6) & 0x1F;

        let (helper, offset) = match instr.opcode {
            Opcode::Lsr => ("lsr", if offset == 0 { 32 } else { offset }),
            Opcode::Asr => ("asr", if offset == 0 { 32 } else { offset }),
            _ => ("lsl", offset),
        };

        Ok(format!("{} = CPU.{}T({}, {});", rd, helper, rs, offset))
    }

    /// THUMB2: ADD/SUB Rd, Rs, Rn or #imm3
    pub(super) fn op_add_subtract(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 0)?;
        let rs = self.low(instr, 3)?;

        let (helper, operand) = match instr.opcode {
            Opcode::AddRegister => ("add", self.low(instr, 6)?),
            Opcode::SubRegister => ("sub", self.low(instr, 6)?),
            Opcode::AddImmediate3 => ("add", format!("0x{:x}", (instr.word >> 6) & 0x7)),
            _ => ("sub", format!("0x{:x}", (instr.word >> 6) & 0x7)),
        };

        Ok(format!("{} = CPU.{}T({}, {});", rd, helper, rs, operand))
    }

    /// THUMB3: MOV/CMP/ADD/SUB Rd, #imm8
    pub(super) fn op_immediate(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 8)?;
        let immediate = instr.word & 0xFF;

        Ok(match instr.opcode {
            Opcode::MovImmediate => format!("{} = CPU.movT(0, 0x{:x});", rd, immediate),
            Opcode::CmpImmediate => format!("CPU.cmpT({}, 0x{:x});", rd, immediate),
            Opcode::AddImmediate => format!("{0} = CPU.addT({0}, 0x{1:x});", rd, immediate),
            _ => format!("{0} = CPU.subT({0}, 0x{1:x});", rd, immediate),
        })
    }

    /// THUMB4: ALU operation Rd, Rs
    ///
    /// TST, CMP and CMN only update the flags.
    pub(super) fn op_alu(&mut self, instr: &Instruction) -> Result<String> {
        let rd = self.low(instr, 0)?;
        let rs = self.low(instr, 3)?;
        let helper = ALU_HELPERS[((instr.word >> 6) & 0xF) as usize];

        Ok(match instr.opcode {
            Opcode::Tst | Opcode::Cmp | Opcode::Cmn => {
                format!("CPU.{}T({}, {});", helper, rd, rs)
            }
            _ => format!("{0} = CPU.{1}T({0}, {2});", rd, helper, rs),
        })
    }
}
