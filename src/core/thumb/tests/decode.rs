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
use super::super::{decode, Opcode};
use crate::core::error::TranslateError;

#[test]
fn test_add_subtract_before_shift() {
    // THUMB2 shares the THUMB1 prefix
    assert_eq!(decode(0x1888, 0).unwrap(), Opcode::AddRegister);
    assert_eq!(decode(0x1A88, 0).unwrap(), Opcode::SubRegister);
    assert_eq!(decode(0x1CC8, 0).unwrap(), Opcode::AddImmediate3);
    assert_eq!(decode(0x1E48, 0).unwrap(), Opcode::SubImmediate3);
    assert_eq!(decode(0x0808, 0).unwrap(), Opcode::Lsr);
}

#[test]
fn test_alu_table() {
    assert_eq!(decode(0x4008, 0).unwrap(), Opcode::And);
    assert_eq!(decode(0x4248, 0).unwrap(), Opcode::Neg);
    assert_eq!(decode(0x4348, 0).unwrap(), Opcode::Mul);
    assert_eq!(decode(0x43C8, 0).unwrap(), Opcode::Mvn);
}

#[test]
fn test_register_offset_groups_split_on_bit_9() {
    assert_eq!(decode(0x5088, 0).unwrap(), Opcode::StrRegister);
    assert_eq!(decode(0x5C88, 0).unwrap(), Opcode::LdrbRegister);
    assert_eq!(decode(0x5688, 0).unwrap(), Opcode::LdsbRegister);
    assert_eq!(decode(0x5E88, 0).unwrap(), Opcode::LdshRegister);
}

#[test]
fn test_swi_before_conditional_branch() {
    assert_eq!(decode(0xDF05, 0).unwrap(), Opcode::Swi);
    assert_eq!(decode(0xD0FD, 0).unwrap(), Opcode::BranchConditional);
}

#[test]
fn test_undefined_condition_is_decode_error() {
    assert!(matches!(
        decode(0xDE00, 0x0800_0100),
        Err(TranslateError::Decode {
            address: 0x0800_0100,
            word: 0xDE00
        })
    ));
}

#[test]
fn test_long_branch_pair() {
    assert_eq!(decode(0xF808_F000, 0).unwrap(), Opcode::Bl);
    assert_eq!(decode(0xE801_F000, 0).unwrap(), Opcode::Blx);
    // suffix is not a BL half
    assert!(decode(0x4770_F000, 0).is_err());
    // prefix on its own
    assert!(decode(0xF000, 0).is_err());
}

#[test]
fn test_stack_formats() {
    assert_eq!(decode(0xB082, 0).unwrap(), Opcode::AddSp);
    assert_eq!(decode(0xB530, 0).unwrap(), Opcode::Push);
    assert_eq!(decode(0xBD30, 0).unwrap(), Opcode::Pop);
    assert_eq!(decode(0xCB01, 0).unwrap(), Opcode::Ldmia);
}
