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
use crate::core::arm::decode::{
    decode_rotated_immediate, decode_shifter, is_immediate, sets_flags,
};
use crate::core::arm::shift::{
    carry_by_immediate, carry_by_register, shift_by_immediate, shift_by_register, ShiftType,
};
use crate::core::arm::{Instruction, Opcode, Register};
use crate::core::error::Result;

/// Binary operator of the non-flag-setting form
fn operator(op: Opcode) -> &'static str {
    match op {
        Opcode::And | Opcode::Tst => "&",
        Opcode::Eor | Opcode::Teq => "^",
        Opcode::Sub | Opcode::Cmp => "-",
        Opcode::Add | Opcode::Cmn => "+",
        _ => "|",
    }
}

/// Expression computed by a data-processing operation without flag updates
fn expression(op: Opcode, left: &str, right: &str) -> String {
    const CARRY_IN: &str = "(CPU.cpsr().getCarry() ? 1 : 0)";
    const BORROW_IN: &str = "(CPU.cpsr().getCarry() ? 0 : 1)";

    match op {
        Opcode::Mov => right.to_string(),
        Opcode::Mvn => format!("~{}", right),
        Opcode::Bic => format!("{} & ~{}", left, right),
        Opcode::Rsb => format!("{} - {}", right, left),
        Opcode::Adc => format!("{} + {} + {}", left, right, CARRY_IN),
        Opcode::Sbc => format!("{} - {} - {}", left, right, BORROW_IN),
        Opcode::Rsc => format!("{} - {} - {}", right, left, BORROW_IN),
        _ => format!("{} {} {}", left, operator(op), right),
    }
}

impl Translator {
    /// Data processing (AND..MVN)
    ///
    /// Format: | cond | 00 | I | op (4) | S | Rn | Rd | operand2 (12) |
    ///
    /// With S set the operation goes through the flag-setting helper
    /// `CPU.<op>A(...)`. Logical operations additionally emit the shifter
    /// carry: before the statement for a shifted register (its value may be
    /// overwritten), after it for a rotated immediate.
    pub(super) fn op_data_processing(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let op = instr.opcode;
        let set_flags = sets_flags(word);
        let carry_out = set_flags && op.is_logical();
        let rn = Register::field(word, 16, address)?;
        let rd = Register::field(word, 12, address)?;

        // mov pc, lr
        if op == Opcode::Mov
            && rd == Register::Pc
            && !set_flags
            && !is_immediate(word)
            && word & 0xFFF == 0xE
        {
            return Ok(format!("return {};", self.reg(Register::R0)));
        }

        let mut before = None;
        let mut after = None;
        let mut pc_offset = 8;

        let right = if is_immediate(word) {
            let (value, rotation) = decode_rotated_immediate(word);
            if carry_out && rotation != 0 {
                after = Some(format!("CPU.setCFlag({});", value & 0x8000_0000 != 0));
            }
            format!("0x{:x}", value)
        } else {
            let (amount, kind, register_shift, rm) = decode_shifter(word);
            let kind = ShiftType::from_bits(kind);
            let rm = Register::from_index(rm, address)?;

            if register_shift {
                pc_offset = 12;
                let value = self.operand(rm, address, pc_offset);
                let rs = self.reg(Register::from_index(amount, address)?);
                if carry_out {
                    before = Some(carry_by_register(kind, &value, &rs));
                }
                shift_by_register(kind, &value, &rs)
            } else {
                let value = self.operand(rm, address, pc_offset);
                let old_carry = format!("oldCarry{:x}", address);
                if carry_out {
                    before = carry_by_immediate(kind, &value, amount, &old_carry);
                    shift_by_immediate(kind, &value, amount, &old_carry)
                } else {
                    shift_by_immediate(kind, &value, amount, "CPU.cpsr().getCarry()")
                }
            }
        };

        let unary = matches!(op, Opcode::Mov | Opcode::Mvn);
        let left = if unary {
            String::new()
        } else {
            self.operand(rn, address, pc_offset)
        };

        let value = if set_flags {
            let name = format!("{:?}", op).to_lowercase();
            if unary {
                format!("CPU.{}A({})", name, right)
            } else {
                format!("CPU.{}A({}, {})", name, left, right)
            }
        } else {
            expression(op, &left, &right)
        };

        let statement = if op.is_compare() {
            format!("{};", value)
        } else {
            format!("{} = {};", self.reg(rd), value)
        };

        let mut lines: Vec<String> = before.into_iter().collect();
        lines.push(statement);
        lines.extend(after);
        if rd == Register::Pc && set_flags && !op.is_compare() {
            lines.push("CPU.restorePsr();".to_string());
        }

        Ok(lines.join("\n"))
    }
}
