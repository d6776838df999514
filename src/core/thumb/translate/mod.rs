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

//! Thumb translator
//!
//! Thumb instructions are unconditional except for THUMB16, which wraps its
//! branch in the shared condition guard. Handlers are grouped the way the
//! formats are: ALU (THUMB1-4), hi registers (THUMB5), loads and stores
//! (THUMB6-11), stack and block transfers (THUMB12-15) and branches
//! (THUMB16-19).

use super::decode::low_register;
use super::{Instruction, Opcode, Register};
use crate::core::config::TranslatorConfig;
use crate::core::error::Result;
use crate::core::output::{AddressFormat, Output, Target};

// Instruction modules organized by format
mod alu;
mod branch;
mod hi_register;
mod stack;
mod transfer;

/// Thumb to pseudocode translator
pub struct Translator {
    config: TranslatorConfig,
    out: Output<Register>,
}

impl Translator {
    /// Create a translator
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            config: config.clone(),
            out: Output::new(0..=0, AddressFormat::Padded, config),
        }
    }

    /// Translate an instruction stream
    ///
    /// # Arguments
    ///
    /// * `instructions` - Decoded instructions in address order
    ///
    /// # Returns
    ///
    /// - `Ok(lines)`: `int` declarations for touched registers, then one
    ///   block per address
    /// - `Err(TranslateError)` for an unsupported hi-register form
    pub fn translate(mut self, instructions: &[Instruction]) -> Result<Vec<String>> {
        let (first, last) = match (instructions.first(), instructions.last()) {
            (Some(first), Some(last)) => (first.address, last.address),
            _ => return Ok(Vec::new()),
        };

        log::debug!(
            "Translating {} Thumb instructions (0x{:08X}..=0x{:08X})",
            instructions.len(),
            first,
            last
        );
        self.out = Output::new(first..=last, AddressFormat::Padded, &self.config);

        for instruction in instructions {
            log::trace!(
                "0x{:08X}: 0x{:04X} {}",
                instruction.address,
                instruction.word,
                instruction.opcode
            );
            let text = self.execute_instruction(instruction)?;
            self.out.put(instruction.address, text);
        }

        let lines = self.out.finish("int");
        log::debug!("Thumb translation produced {} lines", lines.len());
        Ok(lines)
    }

    /// Dispatch an instruction to its handler
    fn execute_instruction(&mut self, instr: &Instruction) -> Result<String> {
        match instr.opcode {
            // THUMB1
            Opcode::Lsl | Opcode::Lsr | Opcode::Asr => self.op_shift_immediate(instr),

            // THUMB2
            Opcode::AddRegister
            | Opcode::SubRegister
            | Opcode::AddImmediate3
            | Opcode::SubImmediate3 => self.op_add_subtract(instr),

            // THUMB3
            Opcode::MovImmediate
            | Opcode::CmpImmediate
            | Opcode::AddImmediate
            | Opcode::SubImmediate => self.op_immediate(instr),

            // THUMB4
            Opcode::And
            | Opcode::Eor
            | Opcode::LslRegister
            | Opcode::LsrRegister
            | Opcode::AsrRegister
            | Opcode::Adc
            | Opcode::Sbc
            | Opcode::Ror
            | Opcode::Tst
            | Opcode::Neg
            | Opcode::Cmp
            | Opcode::Cmn
            | Opcode::Orr
            | Opcode::Mul
            | Opcode::Bic
            | Opcode::Mvn => self.op_alu(instr),

            // THUMB5
            Opcode::AddHi => self.op_add_hi(instr),
            Opcode::CmpHi => self.op_cmp_hi(instr),
            Opcode::MovHi => self.op_mov_hi(instr),
            Opcode::Bx => self.op_bx(instr),

            // THUMB6-11
            Opcode::LdrPc => self.op_ldr_pc(instr),
            Opcode::StrRegister
            | Opcode::StrbRegister
            | Opcode::LdrRegister
            | Opcode::LdrbRegister
            | Opcode::StrhRegister
            | Opcode::LdsbRegister
            | Opcode::LdrhRegister
            | Opcode::LdshRegister => self.op_register_offset(instr),
            Opcode::StrImmediate
            | Opcode::LdrImmediate
            | Opcode::StrbImmediate
            | Opcode::LdrbImmediate
            | Opcode::StrhImmediate
            | Opcode::LdrhImmediate => self.op_immediate_offset(instr),
            Opcode::StrSp | Opcode::LdrSp => self.op_sp_relative(instr),

            // THUMB12-15
            Opcode::Address => self.op_address(instr),
            Opcode::AddSp => Ok(self.op_add_sp(instr)),
            Opcode::Push => self.op_push(instr),
            Opcode::Pop => self.op_pop(instr),
            Opcode::Stmia | Opcode::Ldmia => self.op_multiple(instr),

            // THUMB16-19
            Opcode::BranchConditional => self.op_branch_conditional(instr),
            Opcode::Swi => Ok(self.op_swi(instr)),
            Opcode::B => Ok(self.op_b(instr)),
            Opcode::Bl | Opcode::Blx => Ok(self.op_long_branch(instr)),
        }
    }

    // === Operand rendering ===

    /// Record `register` as touched and render it
    pub(super) fn reg(&mut self, register: Register) -> String {
        self.out.reg(register)
    }

    /// Render the low register (r0-r7) in the 3-bit field at `shift`
    pub(super) fn low(&mut self, instr: &Instruction, shift: u32) -> Result<String> {
        let register = Register::from_index(low_register(instr.word, shift), instr.address)?;
        Ok(self.reg(register))
    }

    /// Render a transfer of control to `address`
    pub(super) fn goto(&mut self, address: u32) -> String {
        match self.out.branch_target(address) {
            Target::Label(label) => format!("{};", label),
            Target::External(function) => {
                format!("{} = {}();", self.reg(Register::R0), function)
            }
        }
    }
}

/// `base + offset`, or just `base` for a zero offset
pub(super) fn offset_address(base: &str, offset: u32) -> String {
    if offset == 0 {
        base.to_string()
    } else {
        format!("{} + 0x{:x}", base, offset)
    }
}
