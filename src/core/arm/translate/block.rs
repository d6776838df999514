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
use crate::core::arm::{Instruction, Register, RegisterList};
use crate::core::error::{Result, TranslateError};

impl Translator {
    /// LDM / STM
    ///
    /// Format: | cond | 100 | P | U | S | W | L | Rn | register list (16) |
    ///
    /// Registers are transferred in ascending order from the lowest address of
    /// the block. A load writes the base back before the transfers so that a
    /// loaded base wins. The S bit is translated only for an LDM that loads
    /// `pc` (the return-from-exception form).
    pub(super) fn op_block_transfer(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let pre = word & (1 << 24) != 0;
        let up = word & (1 << 23) != 0;
        let user_bank = word & (1 << 22) != 0;
        let writeback = word & (1 << 21) != 0;
        let load = word & (1 << 20) != 0;
        let rn = Register::field(word, 16, address)?;
        let list = RegisterList::from_bits_retain(word as u16);

        let restore_psr = user_bank && load && list.contains(RegisterList::PC);
        if user_bank && !restore_psr {
            return Err(TranslateError::unsupported(address, "user-bank block transfer"));
        }

        let span = 4 * list.len();
        let base = self.reg(rn);
        let var = format!("address{:x}", address);

        // IB starts one word above the base, DA one word above base - span
        let start = match (up, pre) {
            (true, false) => base.clone(),
            (true, true) => format!("{} + 0x4", base),
            (false, true) => format!("{} - 0x{:x}", base, span),
            (false, false) if span <= 4 => base.clone(),
            (false, false) => format!("{} - 0x{:x}", base, span - 4),
        };
        let sign = if up { "+" } else { "-" };
        let written_back = writeback.then(|| format!("{} = {} {} 0x{:x};", base, base, sign, span));

        let mut lines = vec![format!("int {} = {};", var, start)];
        if load {
            lines.extend(written_back.clone());
        }

        for (index, register) in list.registers().enumerate() {
            if index > 0 {
                lines.push(format!("{} += 0x4;", var));
            }
            if load {
                let target = self.reg(register);
                lines.push(format!("{} = MEMORY.ref(4, {}).get();", target, var));
            } else {
                let value = self.operand(register, address, 12);
                lines.push(format!("MEMORY.ref(4, {}).setu({});", var, value));
            }
        }

        if !load {
            lines.extend(written_back);
        }
        if restore_psr {
            lines.push("CPU.restorePsr();".to_string());
        }

        Ok(lines.join("\n"))
    }
}
