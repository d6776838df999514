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
    // === Multiply/Divide Instructions ===

    /// MULT: Multiply (signed)
    ///
    /// Splits the 64-bit product across `hi` and `lo`.
    ///
    /// Format: mult rs, rt
    pub(super) fn op_mult(&mut self, rs: Register, rt: Register) -> Emit {
        let product = format!("((long)(int){} * (int){})", self.read(rs), self.read(rt));
        let hi = self.assign(Register::Hi, format!("{} >>> 32", product));
        let lo = self.assign(Register::Lo, format!("{} & 0xffff_ffffL", product));
        Emit::Plain(format!("{}\n{}", hi, lo))
    }

    /// MULTU: Multiply Unsigned
    ///
    /// Format: multu rs, rt
    pub(super) fn op_multu(&mut self, rs: Register, rt: Register) -> Emit {
        let product = format!(
            "(({} & 0xffff_ffffL) * ({} & 0xffff_ffffL))",
            self.read(rs),
            self.read(rt)
        );
        let hi = self.assign(Register::Hi, format!("{} >>> 32", product));
        let lo = self.assign(Register::Lo, format!("{} & 0xffff_ffffL", product));
        Emit::Plain(format!("{}\n{}", hi, lo))
    }

    /// DIV: Divide (signed)
    ///
    /// Remainder goes to `hi`, quotient to `lo`.
    ///
    /// Format: div rs, rt
    pub(super) fn op_div(&mut self, rs: Register, rt: Register) -> Emit {
        let (left, right) = (self.read(rs), self.read(rt));
        let hi = self.assign(Register::Hi, format!("(int){} % (int){}", left, right));
        let lo = self.assign(Register::Lo, format!("(int){} / (int){}", left, right));
        Emit::Plain(format!("{}\n{}", hi, lo))
    }

    /// DIVU: Divide Unsigned
    ///
    /// Format: divu rs, rt
    pub(super) fn op_divu(&mut self, rs: Register, rt: Register) -> Emit {
        let (left, right) = (self.read(rs), self.read(rt));
        let hi = self.assign(
            Register::Hi,
            format!("({} & 0xffff_ffffL) % ({} & 0xffff_ffffL)", left, right),
        );
        let lo = self.assign(
            Register::Lo,
            format!("({} & 0xffff_ffffL) / ({} & 0xffff_ffffL)", left, right),
        );
        Emit::Plain(format!("{}\n{}", hi, lo))
    }

    /// MFHI: Move From HI
    pub(super) fn op_mfhi(&mut self, rd: Register) -> Emit {
        let value = self.read(Register::Hi);
        Emit::Plain(self.assign(rd, value))
    }

    /// MFLO: Move From LO
    pub(super) fn op_mflo(&mut self, rd: Register) -> Emit {
        let value = self.read(Register::Lo);
        Emit::Plain(self.assign(rd, value))
    }

    /// MTHI: Move To HI
    pub(super) fn op_mthi(&mut self, rs: Register) -> Emit {
        let value = self.read(rs);
        Emit::Plain(self.assign(Register::Hi, value))
    }

    /// MTLO: Move To LO
    pub(super) fn op_mtlo(&mut self, rs: Register) -> Emit {
        let value = self.read(rs);
        Emit::Plain(self.assign(Register::Lo, value))
    }
}
