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
use crate::core::arm::decode::decode_rotated_immediate;
use crate::core::arm::{Instruction, Opcode, Register};
use crate::core::error::Result;

impl Translator {
    /// MRS / MSR
    ///
    /// Bit 22 selects SPSR over CPSR. MSR takes a rotated immediate or Rm and
    /// a field mask (bits 16-19: control, extension, status, flags).
    pub(super) fn op_psr(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let psr = if word & (1 << 22) != 0 { "spsr" } else { "cpsr" };

        if instr.opcode == Opcode::PsrRegister && word & (1 << 21) == 0 {
            let rd = Register::field(word, 12, address)?;
            return Ok(format!("{} = CPU.{}().get();", self.reg(rd), psr));
        }

        let value = if instr.opcode == Opcode::MsrImmediate {
            let (value, _) = decode_rotated_immediate(word);
            format!("0x{:x}", value)
        } else {
            let rm = Register::field(word, 0, address)?;
            self.reg(rm)
        };

        let field = |bit: u32| word & (1 << bit) != 0;
        Ok(format!(
            "CPU.{}().msr({}, {}, {}, {}, {});",
            psr,
            value,
            field(19),
            field(18),
            field(17),
            field(16)
        ))
    }
}
