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
use super::super::decode::decode_j_type;
use super::super::{Instruction, Register};
use super::{Emit, Translator};

/// Absolute target of J/JAL: the 26-bit field replaces bits 2-27 of the
/// jump's own address
#[inline(always)]
pub(super) fn jump_target(instr: &Instruction) -> u32 {
    let (_, target) = decode_j_type(instr.word);
    (instr.address & 0xF000_0000) | (target << 2)
}

impl Translator {
    // === Jump Instructions ===

    /// J: Jump
    ///
    /// An in-range target becomes a label reference.
    ///
    /// Format: j target
    /// Output: `LAB_80010020;`
    pub(super) fn op_j(&mut self, instr: &Instruction) -> Emit {
        Emit::Jump(self.goto(jump_target(instr)))
    }

    /// JAL: Jump And Link
    ///
    /// Always a call, the callee's result lands in `v0`.
    ///
    /// Format: jal target
    /// Output: `v0 = FUN_80020000();`
    pub(super) fn op_jal(&mut self, instr: &Instruction) -> Emit {
        let function = self.function(jump_target(instr));
        Emit::Jump(self.call(function))
    }

    /// JR: Jump Register
    ///
    /// `jr ra` is a return. Any other register is an indirect jump.
    ///
    /// Format: jr rs
    /// Output: `return;` or `MEMORY.jump(t9);`
    pub(super) fn op_jr(&mut self, rs: Register) -> Emit {
        let text = if rs == Register::Ra {
            self.out.touch(Register::Ra);
            "return;".to_string()
        } else {
            format!("MEMORY.jump({});", self.read(rs))
        };
        Emit::Jump(text)
    }

    /// JALR: Jump And Link Register
    ///
    /// Indirect call through `rs`.
    ///
    /// Format: jalr rd, rs
    /// Output: `v0 = MEMORY.call(t9);`
    pub(super) fn op_jalr(&mut self, rs: Register) -> Emit {
        let target = self.read(rs);
        Emit::Jump(self.assign(Register::V0, format!("MEMORY.call({})", target)))
    }
}
