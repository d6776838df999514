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
    // === Store Instructions ===

    /// SB/SH/SW: Store to memory
    ///
    /// `sp`-relative stores assign the named stack slot.
    ///
    /// Format: sw rt, offset(rs)
    /// Output: `MEMORY.ref(4, rs).offset(-0x8L).setu(rt);` or `sp10 = rt;`
    pub(super) fn op_store(&mut self, instr: &Instruction, rs: Register, rt: Register, size: u8) -> Emit {
        let (_, _, _, imm) = decode_i_type(instr.word);
        let value = self.read(rt);

        if rs == Register::Sp {
            let slot = self.stack_slot(imm);
            return Emit::Plain(format!("{} = {};", slot, value));
        }

        Emit::Plain(format!(
            "MEMORY.ref({}, {}).offset({}L).setu({});",
            size,
            self.read(rs),
            signed_hex(sign_extend(imm as u32, 16) as i64),
            value
        ))
    }
}
