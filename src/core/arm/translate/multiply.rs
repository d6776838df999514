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
use crate::core::arm::decode::sets_flags;
use crate::core::arm::{Instruction, Register};
use crate::core::error::{Result, TranslateError};

impl Translator {
    /// MUL / MLA
    ///
    /// Format: | cond | 000000 | A | S | Rd | Rn | Rs | 1001 | Rm |
    pub(super) fn op_multiply(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;
        let accumulate = word & (1 << 21) != 0;

        let rd = Register::field(word, 16, address)?;
        let rs = Register::field(word, 8, address)?;
        let rm = Register::field(word, 0, address)?;
        let rd = self.reg(rd);
        let rs = self.reg(rs);
        let rm = self.reg(rm);

        let value = match (accumulate, sets_flags(word)) {
            (false, false) => format!("{} * {}", rm, rs),
            (false, true) => format!("CPU.mulA({}, {})", rm, rs),
            (true, flags) => {
                let rn = Register::field(word, 12, address)?;
                let rn = self.reg(rn);
                if flags {
                    format!("CPU.mlaA({}, {}, {})", rm, rs, rn)
                } else {
                    format!("{} * {} + {}", rm, rs, rn)
                }
            }
        };

        Ok(format!("{} = {};", rd, value))
    }

    /// UMULL / UMLAL / SMULL / SMLAL
    ///
    /// Format: | cond | 00001 | U | A | S | RdHi | RdLo | Rs | 1001 | Rm |
    ///
    /// The flag-setting forms are not translated.
    pub(super) fn op_multiply_long(&mut self, instr: &Instruction) -> Result<String> {
        let word = instr.word;
        let address = instr.address;

        if sets_flags(word) {
            return Err(TranslateError::unsupported(address, "flag-setting long multiply"));
        }

        let signed = word & (1 << 22) != 0;
        let accumulate = word & (1 << 21) != 0;
        let hi = Register::field(word, 16, address)?;
        let lo = Register::field(word, 12, address)?;
        let rs = Register::field(word, 8, address)?;
        let rm = Register::field(word, 0, address)?;
        let (hi, lo, rs, rm) = (self.reg(hi), self.reg(lo), self.reg(rs), self.reg(rm));

        let mut product = if signed {
            format!("(long){} * {}", rm, rs)
        } else {
            format!("({} & 0xffff_ffffL) * ({} & 0xffff_ffffL)", rm, rs)
        };
        if accumulate {
            product = format!("{} + ((long){} << 32 | {} & 0xffff_ffffL)", product, hi, lo);
        }

        let result = format!("result{:x}", address);
        Ok(format!(
            "final long {result} = {product};\n{lo} = (int){result};\n{hi} = (int)({result} >>> 32);",
        ))
    }
}
