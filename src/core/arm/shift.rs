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

//! Barrel shifter rendering
//!
//! Produces the shifted-operand expression and, for flag-setting logical
//! operations, the carry-out statement. Expressions are returned grouped
//! (atom, call, or parenthesized) so callers can embed them without extra
//! parentheses.

/// Shift type field (bits 5-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftType {
    Lsl,
    Lsr,
    Asr,
    Ror,
}

impl ShiftType {
    /// Decode the 2-bit shift type
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x3 {
            0 => ShiftType::Lsl,
            1 => ShiftType::Lsr,
            2 => ShiftType::Asr,
            _ => ShiftType::Ror,
        }
    }
}

/// Shift `value` by a constant
///
/// An amount of zero keeps the encoding's special meaning: `LSR #0` and
/// `ASR #0` shift by 32, `ROR #0` is RRX through `carry`.
///
/// ```
/// use asmlift::core::arm::shift::{shift_by_immediate, ShiftType};
///
/// assert_eq!(shift_by_immediate(ShiftType::Lsl, "r1", 2, "c"), "(r1 << 2)");
/// assert_eq!(shift_by_immediate(ShiftType::Lsr, "r1", 0, "c"), "0");
/// ```
pub fn shift_by_immediate(kind: ShiftType, value: &str, amount: u32, carry: &str) -> String {
    match (kind, amount) {
        (ShiftType::Lsl, 0) => value.to_string(),
        (ShiftType::Lsr, 0) => "0".to_string(),
        (ShiftType::Asr, 0) => format!("({} >> 31)", value),
        (ShiftType::Ror, 0) => format!("(({} ? 0x8000_0000 : 0) | {} >>> 1)", carry, value),
        _ => shift_by_register(kind, value, &amount.to_string()),
    }
}

/// Shift `value` by an expression (a register, or a non-zero constant)
pub fn shift_by_register(kind: ShiftType, value: &str, amount: &str) -> String {
    match kind {
        ShiftType::Lsl => format!("({} << {})", value, amount),
        ShiftType::Lsr => format!("({} >>> {})", value, amount),
        ShiftType::Asr => format!("({} >> {})", value, amount),
        ShiftType::Ror => format!("Integer.rotateRight({}, {})", value, amount),
    }
}

/// Test of bit `bit` of `value`
fn bit_test(value: &str, bit: u32) -> String {
    format!("({} & 0x{:x}) != 0", value, 1u32 << bit)
}

/// Carry-out of a constant shift, `None` when the carry is unchanged
///
/// # Arguments
///
/// * `kind` - Shift type
/// * `value` - Operand being shifted
/// * `amount` - Shift amount field
/// * `old_carry` - Variable that keeps the carry for RRX
pub fn carry_by_immediate(
    kind: ShiftType,
    value: &str,
    amount: u32,
    old_carry: &str,
) -> Option<String> {
    let carry = match (kind, amount) {
        (ShiftType::Lsl, 0) => return None,
        (ShiftType::Lsl, _) => bit_test(value, 32 - amount),
        (ShiftType::Lsr | ShiftType::Asr, 0) => bit_test(value, 31),
        (ShiftType::Ror, 0) => {
            return Some(format!(
                "final boolean {} = CPU.cpsr().getCarry();\nCPU.setCFlag({});",
                old_carry,
                bit_test(value, 0)
            ))
        }
        _ => bit_test(value, amount - 1),
    };
    Some(format!("CPU.setCFlag({});", carry))
}

/// Carry-out of a register-specified shift
///
/// A zero amount leaves the carry alone, hence the guard.
pub fn carry_by_register(kind: ShiftType, value: &str, amount: &str) -> String {
    let carry = match kind {
        ShiftType::Lsl => format!("({} & 1 << 32 - {}) != 0", value, amount),
        ShiftType::Lsr | ShiftType::Asr | ShiftType::Ror => {
            format!("({} & 1 << {} - 1) != 0", value, amount)
        }
    };
    format!("if({} != 0) {{\n  CPU.setCFlag({});\n}}", amount, carry)
}
