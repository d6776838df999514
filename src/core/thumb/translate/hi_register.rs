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
use crate::core::error::{Result, TranslateError};
use crate::core::thumb::decode::decode_hi_registers;
use crate::core::thumb::{Instruction, Register};

impl Translator {
    /// Registers of a THUMB5 instruction
    fn hi_registers(instr: &Instruction) -> Result<(Register, Register)> {
        let (rd, rs) = decode_hi_registers(instr.word);
        Ok((
            Register::from_index(rd, instr.address)?,
            Register::from_index(rs, instr.address)?,
        ))
    }

    /// Value of `pc` as read by a THUMB5 instruction
    fn pc_value(instr: &Instruction) -> String {
        format!("0x{:07x}", instr.address.wrapping_add(4))
    }

    /// Render a THUMB5 source operand, `pc` reads as address + 4
    fn hi_source(&mut self, instr: &Instruction, rs: Register) -> String {
        if rs == Register::Pc {
            Self::pc_value(instr)
        } else {
            self.reg(rs)
        }
    }

    /// ADD Rd, Rs (hi registers, flags unchanged)
    pub(super) fn op_add_hi(&mut self, instr: &Instruction) -> Result<String> {
        let (rd, rs) = Self::hi_registers(instr)?;
        if rd == Register::Pc {
            return Err(TranslateError::unsupported(instr.address, "hi-register add to pc"));
        }

        let source = self.hi_source(instr, rs);
        Ok(format!("{} += {};", self.reg(rd), source))
    }

    /// CMP Rd, Rs (hi registers)
    pub(super) fn op_cmp_hi(&mut self, instr: &Instruction) -> Result<String> {
        let (rd, rs) = Self::hi_registers(instr)?;
        if rd == Register::Pc || rs == Register::Pc {
            return Err(TranslateError::unsupported(instr.address, "hi-register compare with pc"));
        }

        let rd = self.reg(rd);
        Ok(format!("CPU.cmpT({}, {});", rd, self.reg(rs)))
    }

    /// MOV Rd, Rs (hi registers); `mov pc, lr` returns
    pub(super) fn op_mov_hi(&mut self, instr: &Instruction) -> Result<String> {
        let (rd, rs) = Self::hi_registers(instr)?;
        if rd == Register::Pc && rs == Register::Lr {
            return Ok(format!("return {};", self.reg(Register::R0)));
        }

        let source = self.hi_source(instr, rs);
        Ok(format!("{} = {};", self.reg(rd), source))
    }

    /// BX Rs: `bx lr` returns, anything else is an indirect call
    pub(super) fn op_bx(&mut self, instr: &Instruction) -> Result<String> {
        let (_, rs) = Self::hi_registers(instr)?;
        if rs == Register::Lr {
            return Ok(format!("return {};", self.reg(Register::R0)));
        }

        let target = self.hi_source(instr, rs);
        Ok(format!("{} = MEMORY.call({});", self.reg(Register::R0), target))
    }
}
