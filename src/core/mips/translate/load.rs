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
use crate::core::output::{sign_extend, signed_hex};

impl Translator {
    // === Load Instructions ===

    /// LB/LH/LW/LBU/LHU: Load from memory
    ///
    /// `sp`-relative loads read a named stack slot (`sp10`) with a narrowing
    /// cast for the signed forms. Everything else goes through `MEMORY`.
    ///
    /// Format: lw rt, offset(rs)
    /// Output: `rt = MEMORY.ref(4, rs).offset(0x10L).get();`
    ///
    /// # Arguments
    ///
    /// * `instr` - The instruction
    /// * `rs` - Base register
    /// * `rt` - Destination register
    /// * `size` - Access width in bytes (1, 2 or 4)
    /// * `signed` - Sign-extend the loaded value
    pub(super) fn op_load(
        &mut self,
        instr: &Instruction,
        rs: Register,
        rt: Register,
        size: u8,
        signed: bool,
    ) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);

        let value = if rs == Register::Sp {
            let slot = self.stack_slot(imm);
            match (size, signed) {
                (1, true) => format!("(byte){}", slot),
                (2, true) => format!("(short){}", slot),
                _ => slot,
            }
        } else {
            format!(
                "MEMORY.ref({}, {}).offset({}L).{}()",
                size,
                self.read(rs),
                signed_hex(sign_extend(imm as u32, 16) as i64),
                if signed { "getSigned" } else { "get" }
            )
        };

        Emit::Plain(self.assign(rt, value))
    }
}
