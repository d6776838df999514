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
use super::super::decode::decode_i_type;
use super::super::{Instruction, Register};
use super::{Emit, Translator};

impl Translator {
    // === Logical Instructions ===

    /// AND: Bitwise AND
    ///
    /// Format: and rd, rs, rt
    pub(super) fn op_and(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} & {}", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// OR: Bitwise OR
    ///
    /// ORing with `zero` is the `move` pseudo-op.
    ///
    /// Format: or rd, rs, rt
    pub(super) fn op_or(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = match (rs, rt) {
            (Register::Zero, other) | (other, Register::Zero) => self.read(other),
            _ => format!("{} | {}", self.read(rs), self.read(rt)),
        };
        Emit::Plain(self.assign(rd, value))
    }

    /// XOR: Bitwise XOR
    ///
    /// Format: xor rd, rs, rt
    pub(super) fn op_xor(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("{} ^ {}", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// NOR: Bitwise NOR
    ///
    /// Format: nor rd, rs, rt
    /// Output: `rd = ~(rs | rt);`
    pub(super) fn op_nor(&mut self, rs: Register, rt: Register, rd: Register) -> Emit {
        let value = format!("~({} | {})", self.read(rs), self.read(rt));
        Emit::Plain(self.assign(rd, value))
    }

    /// ANDI: Bitwise AND Immediate (zero-extended)
    ///
    /// Format: andi rt, rs, imm
    /// Output: `rt = rs & 0xffL;`
    pub(super) fn op_andi(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let value = format!("{} & 0x{:x}L", self.read(rs), imm);
        Emit::Plain(self.assign(rt, value))
    }

    /// ORI: Bitwise OR Immediate (zero-extended)
    ///
    /// With `zero` as the source the immediate is loaded as is.
    ///
    /// Format: ori rt, rs, imm
    pub(super) fn op_ori(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let value = if rs == Register::Zero {
            format!("0x{:x}L", imm)
        } else {
            format!("{} | 0x{:x}L", self.read(rs), imm)
        };
        Emit::Plain(self.assign(rt, value))
    }

    /// XORI: Bitwise XOR Immediate (zero-extended)
    ///
    /// Format: xori rt, rs, imm
    pub(super) fn op_xori(&mut self, instr: &Instruction, rs: Register, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let value = format!("{} ^ 0x{:x}L", self.read(rs), imm);
        Emit::Plain(self.assign(rt, value))
    }

    /// LUI: Load Upper Immediate
    ///
    /// Format: lui rt, imm
    /// Output: `rt = 0x8001_0000L;`
    pub(super) fn op_lui(&mut self, instr: &Instruction, rt: Register) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let value = format!("0x{:x}_0000L", imm);
        Emit::Plain(self.assign(rt, value))
    }
}
