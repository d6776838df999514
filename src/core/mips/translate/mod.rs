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

//! MIPS translator
//!
//! Instruction handlers are organized by type, mirroring the decoder's
//! opcode families. Each handler returns an [`Emit`] describing the text and
//! its control-flow kind; [`Translator::translate`] then places the text,
//! folding delay-slot instructions into the branch they follow.

use super::decode::decode_r_type;
use super::{Instruction, Opcode, Register};
use crate::core::config::TranslatorConfig;
use crate::core::error::Result;
use crate::core::output::{indent, AddressFormat, Output, Target};

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod cop;
mod exception;
mod jump;
mod load;
mod logical;
mod multiply;
mod shift;
mod store;

/// Text produced for one instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Emit {
    /// Straight-line code
    Plain(String),
    /// Unconditional transfer, the delay slot goes in front of it
    Jump(String),
    /// Conditional branch, the delay slot runs on both paths
    Branch { guard: String, body: String },
}

impl Emit {
    fn render(&self) -> String {
        match self {
            Emit::Plain(text) | Emit::Jump(text) => text.clone(),
            Emit::Branch { guard, body } => {
                format!("if({}) {{\n{}\n}}", guard, indent(body))
            }
        }
    }
}

/// Branch waiting for its delay slot
struct Pending {
    address: u32,
    emit: Emit,
}

/// MIPS to pseudocode translator
///
/// State lives for one [`Translator::translate`] call.
pub struct Translator {
    config: TranslatorConfig,
    out: Output<Register>,
    pending: Option<Pending>,
}

impl Translator {
    /// Create a translator
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            config: config.clone(),
            out: Output::new(0..=0, AddressFormat::Plain, config),
            pending: None,
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
    /// - `Ok(lines)`: `long` declarations for touched registers and stack
    ///   slots, then one block per address
    /// - `Err(TranslateError)` if an instruction hits an unsupported sub-case
    pub fn translate(mut self, instructions: &[Instruction]) -> Result<Vec<String>> {
        let (first, last) = match (instructions.first(), instructions.last()) {
            (Some(first), Some(last)) => (first.address, last.address),
            _ => return Ok(Vec::new()),
        };

        log::debug!(
            "Translating {} MIPS instructions (0x{:08X}..=0x{:08X})",
            instructions.len(),
            first,
            last
        );
        self.out = Output::new(first..=last, AddressFormat::Plain, &self.config);

        for instruction in instructions {
            log::trace!(
                "0x{:08X}: 0x{:08X} {}",
                instruction.address,
                instruction.word,
                instruction.opcode
            );
            let emit = self.execute_instruction(instruction)?;
            self.place(instruction.address, emit);
        }

        if let Some(pending) = self.pending.take() {
            log::debug!(
                "Branch at 0x{:08X} has no delay slot in the stream",
                pending.address
            );
        }

        let lines = self.out.finish("long");
        log::debug!("MIPS translation produced {} lines", lines.len());
        Ok(lines)
    }

    /// Place an instruction's text, resolving a pending delay slot
    fn place(&mut self, address: u32, emit: Emit) {
        match self.pending.take() {
            None => self.out.put(address, emit.render()),
            Some(pending) => {
                if !matches!(emit, Emit::Plain(_)) {
                    log::warn!(
                        "Branch at 0x{:08X} sits in the delay slot of 0x{:08X}",
                        address,
                        pending.address
                    );
                    self.out.put(address, emit.render());
                } else {
                    self.fill_delay_slot(pending, emit.render());
                    return;
                }
            }
        }

        if !matches!(emit, Emit::Plain(_)) {
            self.pending = Some(Pending { address, emit });
        }
    }

    /// Fold a delay-slot instruction into the branch at `pending.address`
    fn fill_delay_slot(&mut self, pending: Pending, delay: String) {
        if delay.is_empty() {
            return;
        }

        match pending.emit {
            Emit::Plain(_) => {}
            Emit::Jump(_) => self.out.prepend(pending.address, delay),
            Emit::Branch { guard, body } => {
                let text = format!(
                    "if({}) {{\n{}\n{}\n}}\n{}",
                    guard,
                    indent(&delay),
                    indent(&body),
                    delay
                );
                self.out.put(pending.address, text);
            }
        }
    }

    /// Dispatch an instruction to its handler
    ///
    /// # Arguments
    ///
    /// * `instr` - The decoded instruction
    ///
    /// # Returns
    ///
    /// The handler's text, or an error for an unsupported sub-case
    fn execute_instruction(&mut self, instr: &Instruction) -> Result<Emit> {
        let (rs, rt, rd, shamt, _) = decode_r_type(instr.word);
        let address = instr.address;
        let rs = Register::from_index(rs as u32, address)?;
        let rt = Register::from_index(rt as u32, address)?;
        let rd = Register::from_index(rd as u32, address)?;

        let emit = match instr.opcode {
            Opcode::Nop => Emit::Plain(String::new()),

            // Shifts
            Opcode::Sll => self.op_sll(rt, rd, shamt),
            Opcode::Srl => self.op_srl(rt, rd, shamt),
            Opcode::Sra => self.op_sra(rt, rd, shamt),
            Opcode::Sllv => self.op_sllv(rs, rt, rd),
            Opcode::Srlv => self.op_srlv(rs, rt, rd),
            Opcode::Srav => self.op_srav(rs, rt, rd),

            // Jumps
            Opcode::Jr => self.op_jr(rs),
            Opcode::Jalr => self.op_jalr(rs),
            Opcode::J => self.op_j(instr),
            Opcode::Jal => self.op_jal(instr),

            // Exceptions
            Opcode::Syscall => self.op_syscall(instr),
            Opcode::Break => self.op_break(instr),

            // Multiply and divide
            Opcode::Mfhi => self.op_mfhi(rd),
            Opcode::Mthi => self.op_mthi(rs),
            Opcode::Mflo => self.op_mflo(rd),
            Opcode::Mtlo => self.op_mtlo(rs),
            Opcode::Mult => self.op_mult(rs, rt),
            Opcode::Multu => self.op_multu(rs, rt),
            Opcode::Div => self.op_div(rs, rt),
            Opcode::Divu => self.op_divu(rs, rt),

            // Arithmetic
            Opcode::Add | Opcode::Addu => self.op_addu(rs, rt, rd),
            Opcode::Sub | Opcode::Subu => self.op_subu(rs, rt, rd),
            Opcode::Slt => self.op_slt(rs, rt, rd),
            Opcode::Sltu => self.op_sltu(rs, rt, rd),
            Opcode::Addi | Opcode::Addiu => self.op_addiu(instr, rs, rt),
            Opcode::Slti => self.op_slti(instr, rs, rt),
            Opcode::Sltiu => self.op_sltiu(instr, rs, rt),

            // Logical
            Opcode::And => self.op_and(rs, rt, rd),
            Opcode::Or => self.op_or(rs, rt, rd),
            Opcode::Xor => self.op_xor(rs, rt, rd),
            Opcode::Nor => self.op_nor(rs, rt, rd),
            Opcode::Andi => self.op_andi(instr, rs, rt),
            Opcode::Ori => self.op_ori(instr, rs, rt),
            Opcode::Xori => self.op_xori(instr, rs, rt),
            Opcode::Lui => self.op_lui(instr, rt),

            // Branches
            Opcode::Bcondz => self.op_bcondz(instr, rs),
            Opcode::Beq => self.op_beq(instr, rs, rt),
            Opcode::Bne => self.op_bne(instr, rs, rt),
            Opcode::Blez => self.op_blez(instr, rs),
            Opcode::Bgtz => self.op_bgtz(instr, rs),

            // Loads
            Opcode::Lb => self.op_load(instr, rs, rt, 1, true),
            Opcode::Lh => self.op_load(instr, rs, rt, 2, true),
            Opcode::Lw => self.op_load(instr, rs, rt, 4, false),
            Opcode::Lbu => self.op_load(instr, rs, rt, 1, false),
            Opcode::Lhu => self.op_load(instr, rs, rt, 2, false),

            // Stores
            Opcode::Sb => self.op_store(instr, rs, rt, 1),
            Opcode::Sh => self.op_store(instr, rs, rt, 2),
            Opcode::Sw => self.op_store(instr, rs, rt, 4),

            // Coprocessors
            Opcode::Cop0 => self.op_cop0(instr, rt),
            Opcode::Cop2 => self.op_cop2(instr, rt),
            Opcode::Lwc2 => self.op_lwc2(instr, rs),
            Opcode::Swc2 => self.op_swc2(instr, rs),

            Opcode::Lwl
            | Opcode::Lwr
            | Opcode::Swl
            | Opcode::Swr
            | Opcode::Lwc0
            | Opcode::Swc0 => self.unsupported(instr),
        };

        Ok(emit)
    }

    /// Placeholder for a decoded opcode that has no translation
    pub(super) fn unsupported(&self, instr: &Instruction) -> Emit {
        log::warn!(
            "Unsupported operation {} at 0x{:08X}",
            instr.opcode,
            instr.address
        );
        Emit::Plain(format!(
            "// Unsupported operation {} at address {:x}",
            instr.opcode, instr.address
        ))
    }

    // === Operand rendering ===

    /// Render a register read, `zero` reads as `0`
    pub(super) fn read(&mut self, register: Register) -> String {
        if register == Register::Zero {
            "0".to_string()
        } else {
            self.out.reg(register)
        }
    }

    /// Render `register = expression;`
    ///
    /// Writes to `zero` have no effect and are kept as a comment.
    pub(super) fn assign(&mut self, register: Register, expression: String) -> String {
        if register == Register::Zero {
            format!("// zero = {};", expression)
        } else {
            format!("{} = {};", self.out.reg(register), expression)
        }
    }

    /// Render a call to `function` whose result lands in `v0`
    pub(super) fn call(&mut self, function: String) -> String {
        self.assign(Register::V0, format!("{}()", function))
    }

    /// Render a transfer of control to `address`
    ///
    /// In-range targets become a label reference, anything else a call.
    pub(super) fn goto(&mut self, address: u32) -> String {
        match self.out.branch_target(address) {
            Target::Label(label) => format!("{};", label),
            Target::External(function) => self.call(function),
        }
    }

    /// Name of the stack-slot variable for an `sp`-relative access
    pub(super) fn stack_slot(&mut self, offset: u16) -> String {
        self.out.variable(format!("sp{:x}", offset))
    }

    /// Name of the external function at `address`
    pub(super) fn function(&self, address: u32) -> String {
        self.out.function(address)
    }
}
