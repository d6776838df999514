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
use super::{run, try_run, BASE};
use crate::core::error::TranslateError;

#[test]
fn test_condition_wraps_statement() {
    // moveq r0, #1
    assert_eq!(
        run(&[0x03A0_0001]),
        vec!["int r0;", "if(CPU.cpsr().getZero()) { // ==\n  r0 = 0x1;\n}"]
    );
}

#[test]
fn test_reserved_condition_is_fatal() {
    let err = try_run(&[0xF3A0_0001]).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::IllegalCondition {
            address: BASE,
            condition: 0xF
        }
    ));
}

#[test]
fn test_branch_to_self_is_label() {
    // b .
    assert_eq!(run(&[0xEAFF_FFFE]), vec!["\n//LAB_8000100\nLAB_8000100;"]);
}

#[test]
fn test_branch_out_of_range_is_call() {
    // b 0x8000148
    assert_eq!(run(&[0xEA00_0010]), vec!["int r0;", "r0 = FUN_8000148();"]);
}

#[test]
fn test_conditional_backward_branch() {
    // mov r0, #1; bne 0x8000100
    assert_eq!(
        run(&[0xE3A0_0001, 0x1AFF_FFFD]),
        vec![
            "int r0;",
            "\n//LAB_8000100\nr0 = 0x1;",
            "if(!CPU.cpsr().getZero()) { // !=\n  LAB_8000100;\n}",
        ]
    );
}

#[test]
fn test_bl_is_always_a_call() {
    // bl 0x8000108 (in range); mov r0, r0; mov r0, #1
    assert_eq!(
        run(&[0xEB00_0000, 0xE1A0_0000, 0xE3A0_0001]),
        vec!["int r0;", "r0 = FUN_8000108();", "r0 = r0;", "r0 = 0x1;"]
    );
}

#[test]
fn test_bx() {
    // bx lr
    assert_eq!(run(&[0xE12F_FF1E]), vec!["int r0;", "return r0;"]);
    // bx r3
    assert_eq!(
        run(&[0xE12F_FF13]),
        vec!["int r0;", "int r3;", "r0 = MEMORY.call(r3);"]
    );
    // blx r3
    assert_eq!(run(&[0xE12F_FF33])[2], "r0 = MEMORY.call(r3);");
}

#[test]
fn test_swi() {
    // swi 0x123456
    assert_eq!(
        run(&[0xEF12_3456]),
        vec![
            "int r0;",
            "int pc;",
            "pc = 0x8000104;\nr0 = CPU.SWI(InstructionSet.ARM); // 0x123456",
        ]
    );
}

#[test]
fn test_decode_error_aborts_run() {
    let err = try_run(&[0xE3A0_0001, 0xEE00_0000]).unwrap_err();
    assert_eq!(err.address(), Some(BASE + 4));
}
