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
use super::super::Instruction;
use super::{Emit, Translator};

/// 20-bit code field of SYSCALL and BREAK (bits 6-25)
#[inline(always)]
fn code(instr: &Instruction) -> u32 {
    (instr.word >> 6) & 0x000F_FFFF
}

impl Translator {
    // === Exception Instructions ===

    /// SYSCALL: System Call
    ///
    /// Output: `CPU.SYSCALL(0x0);`
    pub(super) fn op_syscall(&mut self, instr: &Instruction) -> Emit {
        Emit::Plain(format!("CPU.SYSCALL(0x{:x});", code(instr)))
    }

    /// BREAK: Breakpoint
    ///
    /// Output: `CPU.BREAK(0x0);`
    pub(super) fn op_break(&mut self, instr: &Instruction) -> Emit {
        Emit::Plain(format!("CPU.BREAK(0x{:x});", code(instr)))
    }
}
