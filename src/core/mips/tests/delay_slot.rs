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
use super::super::translate;
use crate::core::config::TranslatorConfig;

const BASE: u32 = 0x8001_0000;

fn run(words: &[u32]) -> Vec<String> {
    let pairs: Vec<(u32, u32)> = words
        .iter()
        .enumerate()
        .map(|(i, &word)| (BASE + 4 * i as u32, word))
        .collect();
    translate(&pairs, &TranslatorConfig::default()).unwrap()
}

#[test]
fn test_return_takes_delay_slot_first() {
    // jr ra; addiu v0, zero, 1
    assert_eq!(
        run(&[0x03E0_0008, 0x2402_0001]),
        vec!["long v0;", "long ra;", "v0 = 0x1L;\nreturn;"]
    );
}

#[test]
fn test_empty_delay_slot_is_dropped() {
    // jr ra; nop
    assert_eq!(run(&[0x03E0_0008, 0x0000_0000]), vec!["long ra;", "return;"]);
}

#[test]
fn test_trailing_branch_without_delay_slot() {
    assert_eq!(run(&[0x03E0_0008]), vec!["long ra;", "return;"]);
}

#[test]
fn test_conditional_branch_duplicates_delay_slot() {
    // beq a0, a1, +2; addiu t0, t0, 1; nop; nop
    let lines = run(&[0x1085_0002, 0x2508_0001, 0x0000_0000, 0x0000_0000]);

    assert_eq!(
        lines,
        vec![
            "long a0;",
            "long a1;",
            "long t0;",
            "if(a0 == a1) {\n  t0 = t0 + 0x1L;\n  LAB_8001000c;\n}\nt0 = t0 + 0x1L;",
            "",
            "\n//LAB_8001000c\n",
        ]
    );
    assert_eq!(lines[3].matches("t0 = t0 + 0x1L;").count(), 2);
}

#[test]
fn test_out_of_range_branch_is_call() {
    // bne a0, zero, -0x100; nop
    let lines = run(&[0x1480_FF00, 0x0000_0000]);

    assert_eq!(
        lines,
        vec![
            "long v0;",
            "long a0;",
            "if(a0 != 0) {\n  v0 = FUN_8000fc04();\n}",
        ]
    );
    assert!(!lines.iter().any(|line| line.contains("//LAB_")));
}

#[test]
fn test_branch_always_pseudo_op() {
    // beq zero, zero, +3; addiu a0, zero, 1; nop; nop; nop
    let lines = run(&[0x1000_0003, 0x2404_0001, 0, 0, 0]);

    assert_eq!(lines[1], "a0 = 0x1L;\nLAB_80010010;");
    assert_eq!(lines.last().map(String::as_str), Some("\n//LAB_80010010\n"));
}

#[test]
fn test_jal_is_always_a_call() {
    // jal 0x80010008; nop; nop
    let lines = run(&[0x0C00_4002, 0, 0]);

    assert_eq!(lines[0], "long v0;");
    assert_eq!(lines[1], "v0 = FUN_80010008();");
    assert!(!lines.iter().any(|line| line.contains("//LAB_")));
}

#[test]
fn test_indirect_jump_and_call() {
    // jr t9; nop
    assert_eq!(run(&[0x0320_0008, 0]), vec!["long t9;", "MEMORY.jump(t9);"]);
    // jalr t9; nop
    assert_eq!(
        run(&[0x0320_F809, 0]),
        vec!["long v0;", "long t9;", "v0 = MEMORY.call(t9);"]
    );
}

#[test]
fn test_linking_branch_calls_target() {
    // bltzal a0, +1; nop
    assert_eq!(
        run(&[0x0490_0001, 0]),
        vec![
            "long v0;",
            "long a0;",
            "if((int)a0 < 0) {\n  v0 = FUN_80010008();\n}",
        ]
    );
}

#[test]
fn test_branch_in_delay_slot_is_flushed() {
    // j 0x80010008; jr ra; nop
    assert_eq!(
        run(&[0x0800_4002, 0x03E0_0008, 0]),
        vec!["long ra;", "LAB_80010008;", "return;", "\n//LAB_80010008"]
    );
}

#[test]
fn test_label_lands_on_existing_code() {
    // addiu a0, a0, 1; bne a0, a1, -2; nop
    let lines = run(&[0x2484_0001, 0x1485_FFFE, 0]);

    assert_eq!(lines[2], "\n//LAB_80010000\na0 = a0 + 0x1L;");
    assert_eq!(lines[3], "if(a0 != a1) {\n  LAB_80010000;\n}");
}

#[test]
fn test_guard_reads_register_before_delay_slot_writes_it() {
    // beq v0, zero, +2; addiu v0, v0, 1; nop; nop
    let lines = run(&[0x1040_0002, 0x2442_0001, 0, 0]);

    assert_eq!(
        lines[1],
        "if(v0 == 0) {\n  v0 = v0 + 0x1L;\n  LAB_8001000c;\n}\nv0 = v0 + 0x1L;"
    );
    let guard = lines[1].find("v0 == 0").unwrap();
    let write = lines[1].find("v0 = v0 + 0x1L;").unwrap();
    assert!(guard < write);
}
