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
use crate::core::arm::decode::decode_shifter;
use crate::core::arm::shift::{shift_by_immediate, ShiftType};
use crate::core::arm::{Instruction, Opcode, Register};
use crate::core::error::{Result, TranslateError};

/// Indexing bits shared by the single and halfword transfers
#[derive(Debug, Clone, Copy)]
struct Indexing {
    /// P: apply the offset before the access
    pre: bool,
    /// U: add the offset
    up: bool,
    /// W: write the address back (pre-indexed only)
    writeback: bool,
}

impl Indexing {
    fn of_word(word: u32) -> Self {
        Self {
            pre: word & (1 << 24) != 0,
            up: word & (1 << 23) != 0,
            writeback: word & (1 << 21) != 0,
        }
    }
}

impl Translator {
    /// LDR / STR / LDRB / STRB
    ///
    /// Format: | cond | 01 | I | P | U | B | W | L | Rn | Rd | offset (12) |
    ///
    /// With I set the offset is a register shifted by a constant.
    pub(super) fn op_single_transfer(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let load = word & (1 << 20) != 0;
        let size = if word & (1 << 22) != 0 { 1 } else { 4 };
        let rn = Register::field(word, 16, address)?;
        let rd = Register::field(word, 12, address)?;

        let offset = if instr.opcode == Opcode::SingleImmediate {
            let offset = word & 0xFFF;
            (offset != 0).then(|| format!("0x{:x}", offset))
        } else {
            let (amount, kind, _, rm) = decode_shifter(word);
            let rm = Register::from_index(rm, address)?;
            let value = self.operand(rm, address, 8);
            Some(shift_by_immediate(
                ShiftType::from_bits(kind),
                &value,
                amount,
                "CPU.cpsr().getCarry()",
            ))
        };

        let var = format!("address{:x}", address);
        let access = if load {
            format!("{} = MEMORY.ref({}, {}).get();", self.reg(rd), size, var)
        } else {
            let value = self.operand(rd, address, 12);
            format!("MEMORY.ref({}, {}).setu({});", size, var, value)
        };

        Ok(self.indexed(address, rn, offset, Indexing::of_word(word), access))
    }

    /// LDRH / STRH / LDRSB / LDRSH
    ///
    /// Format: | cond | 000 | P | U | I | W | L | Rn | Rd | hi (4) | 1 | S | H | 1 | lo/Rm (4) |
    ///
    /// Stores other than STRH (the ARMv5 double-word forms) are not translated.
    pub(super) fn op_halfword_transfer(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let load = word & (1 << 20) != 0;
        let kind = (word >> 5) & 0x3;
        let rn = Register::field(word, 16, address)?;
        let rd = Register::field(word, 12, address)?;

        let (size, getter) = match (load, kind) {
            (_, 0) => {
                return Err(TranslateError::unsupported(address, "halfword transfer with SH=0"))
            }
            (false, 1) => (2, "setu"),
            (false, _) => {
                return Err(TranslateError::unsupported(address, "double-word halfword transfer"))
            }
            (true, 1) => (2, "get"),
            (true, 2) => (1, "getSigned"),
            (true, _) => (2, "getSigned"),
        };

        let offset = if instr.opcode == Opcode::HalfwordImmediate {
            let offset = ((word >> 4) & 0xF0) | (word & 0xF);
            (offset != 0).then(|| format!("0x{:x}", offset))
        } else {
            let rm = Register::field(word, 0, address)?;
            Some(self.operand(rm, address, 8))
        };

        let var = format!("address{:x}", address);
        let access = if load {
            format!("{} = MEMORY.ref({}, {}).{}();", self.reg(rd), size, var, getter)
        } else {
            let value = self.operand(rd, address, 12);
            format!("MEMORY.ref({}, {}).{}({});", size, var, getter, value)
        };

        Ok(self.indexed(address, rn, offset, Indexing::of_word(word), access))
    }

    /// SWP / SWPB
    ///
    /// Format: | cond | 00010 | B | 00 | Rn | Rd | 0000 | 1001 | Rm |
    pub(super) fn op_swap(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let size = if word & (1 << 22) != 0 { 1 } else { 4 };
        let rn = Register::field(word, 16, address)?;
        let rd = Register::field(word, 12, address)?;
        let rm = Register::field(word, 0, address)?;
        let (rn, rd, rm) = (self.reg(rn), self.reg(rd), self.reg(rm));

        let value = format!("value{:x}", address);
        Ok(format!(
            "final int {value} = MEMORY.ref({size}, {rn}).get();\n\
             MEMORY.ref({size}, {rn}).setu({rm});\n\
             {rd} = {value};"
        ))
    }

    /// Surround `access` with the address computation and base writeback
    ///
    /// `access` refers to the address through the `address<hex>` variable.
    /// A `pc` base reads as the instruction address plus 8 and is never
    /// written back.
    fn indexed(
        &mut self,
        address: u32,
        rn: Register,
        offset: Option<String>,
        indexing: Indexing,
        access: String,
    ) -> String {
        let var = format!("address{:x}", address);
        let base = self.operand(rn, address, 8);
        let sign = if indexing.up { "+" } else { "-" };
        let offset_from = |base: &str| match &offset {
            Some(offset) => format!("{} {} {}", base, sign, offset),
            None => base.to_string(),
        };

        let mut lines = Vec::with_capacity(3);
        if indexing.pre {
            lines.push(format!("final int {} = {};", var, offset_from(&base)));
        } else {
            lines.push(format!("final int {} = {};", var, base));
        }
        lines.push(access);

        if rn != Register::Pc {
            if !indexing.pre && offset.is_some() {
                lines.push(format!("{} = {};", base, offset_from(&base)));
            } else if indexing.pre && indexing.writeback {
                lines.push(format!("{} = {};", base, var));
            }
        }

        lines.join("\n")
    }
}
