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

//! ARM translator
//!
//! Handlers are grouped by instruction class. Each returns the unguarded
//! statement text; [`Translator::translate`] wraps it in the condition guard
//! and registers it at the instruction's address.

use super::{Instruction, Opcode, Register};
use crate::core::condition::conditional;
use crate::core::config::TranslatorConfig;
use crate::core::error::Result;
use crate::core::output::{AddressFormat, Output, Target};

// Instruction modules organized by class
mod block;
mod branch;
mod data_processing;
mod multiply;
mod psr;
mod transfer;

/// ARM to pseudocode translator
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
    ///   guarded block per address
    /// - `Err(TranslateError)` for a reserved condition or an unsupported
    ///   sub-case
    pub fn translate(mut self, instructions: &[Instruction]) -> Result<Vec<String>> {
        let (first, last) = match (instructions.first(), instructions.last()) {
            (Some(first), Some(last)) => (first.address, last.address),
            _ => return Ok(Vec::new()),
        };

        log::debug!(
            "Translating {} ARM instructions (0x{:08X}..=0x{:08X})",
            instructions.len(),
            first,
            last
        );
        self.out = Output::new(first..=last, AddressFormat::Padded, &self.config);

        for instruction in instructions {
            log::trace!(
                "0x{:08X}: 0x{:08X} {}",
                instruction.address,
                instruction.word,
                instruction.opcode
            );
            let text = self.execute_instruction(instruction)?;
            let text = conditional(instruction.word, instruction.address, &text)?;
            self.out.put(instruction.address, text);
        }

        let lines = self.out.finish("int");
        log::debug!("ARM translation produced {} lines", lines.len());
        Ok(lines)
    }

    /// Dispatch an instruction to its handler
    fn execute_instruction(&mut self, instr: &Instruction) -> Result<String> {
        match instr.opcode {
            Opcode::And
            | Opcode::Eor
            | Opcode::Sub
            | Opcode::Rsb
            | Opcode::Add
            | Opcode::Adc
            | Opcode::Sbc
            | Opcode::Rsc
            | Opcode::Tst
            | Opcode::Teq
            | Opcode::Cmp
            | Opcode::Cmn
            | Opcode::Orr
            | Opcode::Mov
            | Opcode::Bic
            | Opcode::Mvn => self.op_data_processing(instr),

            Opcode::MsrImmediate | Opcode::PsrRegister => self.op_psr(instr),

            Opcode::Multiply => self.op_multiply(instr),
            Opcode::MultiplyLong => self.op_multiply_long(instr),

            Opcode::Swap => self.op_swap(instr),
            Opcode::SingleRegister | Opcode::SingleImmediate => self.op_single_transfer(instr),
            Opcode::HalfwordRegister | Opcode::HalfwordImmediate => {
                self.op_halfword_transfer(instr)
            }
            Opcode::BlockTransfer => self.op_block_transfer(instr),

            Opcode::B => self.op_b(instr),
            Opcode::Bl => self.op_bl(instr),
            Opcode::Bx => self.op_bx(instr),
            Opcode::Blx => self.op_blx(instr),
            Opcode::Swi => Ok(self.op_swi(instr)),
        }
    }

    // === Operand rendering ===

    /// Record `register` as touched and render it
    pub(super) fn reg(&mut self, register: Register) -> String {
        self.out.reg(register)
    }

    /// Render a register read
    ///
    /// `pc` reads as the instruction address plus the pipeline offset
    /// (8, or 12 when the value is stored or the shift is register-specified).
    pub(super) fn operand(&mut self, register: Register, address: u32, pc_offset: u32) -> String {
        if register == Register::Pc {
            format!("0x{:x}", address.wrapping_add(pc_offset))
        } else {
            self.reg(register)
        }
    }

    /// Render a call to `function` whose result lands in `r0`
    pub(super) fn call(&mut self, function: &str) -> String {
        format!("{} = {}();", self.reg(Register::R0), function)
    }

    /// Render a transfer of control to `address`
    pub(super) fn goto(&mut self, address: u32) -> String {
        match self.out.branch_target(address) {
            Target::Label(label) => format!("{};", label),
            Target::External(function) => self.call(&function),
        }
    }

    /// Name of the external function at `address`
    pub(super) fn function(&self, address: u32) -> String {
        self.out.function(address)
    }
}
