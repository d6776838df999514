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
use super::super::Register;
use super::{Emit, Translator};

impl Translator {
    // === Shift Instructions ===

    /// SLL: Shift Left Logical
    ///
    /// Format: sll rd, rt, shamt
    /// Output: `rd = rt << shamt;`
    pub(super) fn op_sll(&mut self, rt: Register, rd: Register, shamt: u8) -> Emit {
        let value = format!("{} << {}", self.read(rt), shamt);
        Emit::Plain(self.assign(rd, value))
    }

    /// SRL: Shift Right Logical
    ///
    /// Format: srl rd, rt, shamt
    /// Output: `rd = rt >>> shamt;`
    pub(super) fn op_srl(&mut self, rt: Register, rd: Register, shamt: u8) -> Emit {
        let value = format!("{} >>> {}", self.read(rt), shamt);
        Emit::Plain(self.assign(rd, value))
    }

    /// SRA: Shift Right Arithmetic
    ///
    /// The operand is reinterpreted as signed so the sign bit is replicated.
    ///
    /// Format: sra rd, rt, shamt
    /// Output: `rd = (int)rt >> shamt;`
    pub(super) fn op_sra(&mut self, rt: Register, rd: Register, shamt: u8) -> Emit {
        let value = format!("(int){} >> {}", self.read(rt), shamt);
        Emit::Plain(self.assign(rd, value))
    }

    /// SLLV: Shift Left Logical Variable
    ///
    /// Format: sllv rd, rt, rs
    pub(super) fn op_sllv(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} << {}", self.read(rt), self.read(rs));
        Emit::Plain(self.assign(rd, value))
    }

    /// SRLV: Shift Right Logical Variable
    ///
    /// Format: srlv rd, rt, rs
    pub(super) fn op_srlv(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} >>> {}", self.read(rt), self.read(rs));
        Emit::Plain(self.assign(rd, value))
    }

    /// SRAV: Shift Right Arithmetic Variable
    ///
    /// Format: srav rd, rt, rs
    pub(super) fn op_srav(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("(int){} >> {}", self.read(rt), self.read(rs));
        Emit::Plain(self.assign(rd, value))
    }
}
