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
use crate::core::config::{RegisterStyle, TranslatorConfig};

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
fn test_nop_emits_single_empty_line() {
    assert_eq!(run(&[0x0000_0000]), vec![""]);
}

#[test]
fn test_addiu_negative_immediate() {
    // addiu sp, sp, -0x18
    assert_eq!(run(&[0x27BD_FFE8]), vec!["long sp;", "sp = sp + -0x18L;"]);
}

#[test]
fn test_addiu_from_zero_is_constant() {
    // addiu a0, zero, 0x10
    assert_eq!(run(&[0x2404_0010]), vec!["long a0;", "a0 = 0x10L;"]);
}

#[test]
fn test_addu_with_zero_is_move() {
    // addu v0, a1, zero
    assert_eq!(run(&[0x00A0_1021]), vec!["long v0;", "long a1;", "v0 = a1;"]);
}

#[test]
fn test_lui() {
    // lui v0, 0x8001
    assert_eq!(run(&[0x3C02_8001]), vec!["long v0;", "v0 = 0x8001_0000L;"]);
}

#[test]
fn test_sltiu_compares_sign_extended_immediate() {
    // sltiu v0, a0, -1
    assert_eq!(
        run(&[0x2C82_FFFF]),
        vec!["long v0;", "long a0;", "v0 = a0 < 0xffffffffL;"]
    );
}

#[test]
fn test_write_to_zero_is_commented() {
    // sll zero, a0, 2
    assert_eq!(run(&[0x0004_0080]), vec!["long a0;", "// zero = a0 << 2;"]);
}

#[test]
fn test_mult_splits_hi_lo() {
    // mult a0, a1
    assert_eq!(
        run(&[0x0085_0018]),
        vec![
            "long a0;",
            "long a1;",
            "long hi;",
            "long lo;",
            "hi = ((long)(int)a0 * (int)a1) >>> 32;\nlo = ((long)(int)a0 * (int)a1) & 0xffff_ffffL;",
        ]
    );
}

#[test]
fn test_stack_load_uses_slot_variable() {
    // lw ra, 0x14(sp)
    assert_eq!(run(&[0x8FBF_0014]), vec!["long ra;", "long sp14;", "ra = sp14;"]);
}

#[test]
fn test_stack_slots_are_sorted() {
    // sw s0, 0x10(sp); sw ra, 0x14(sp); lb v0, 0x18(sp)
    let lines = run(&[0xAFB0_0010, 0xAFBF_0014, 0x83A2_0018]);
    assert_eq!(
        lines,
        vec![
            "long v0;",
            "long s0;",
            "long ra;",
            "long sp10;",
            "long sp14;",
            "long sp18;",
            "sp10 = s0;",
            "sp14 = ra;",
            "v0 = (byte)sp18;",
        ]
    );
}

#[test]
fn test_stack_slots_follow_frame_order() {
    // sw s0, 0x10(sp); sw ra, 0x4(sp)
    assert_eq!(
        run(&[0xAFB0_0010, 0xAFBF_0004]),
        vec![
            "long s0;",
            "long ra;",
            "long sp4;",
            "long sp10;",
            "sp10 = s0;",
            "sp4 = ra;",
        ]
    );
}

#[test]
fn test_signed_memory_load() {
    // lb v0, -1(a0)
    assert_eq!(
        run(&[0x8082_FFFF]),
        vec![
            "long v0;",
            "long a0;",
            "v0 = MEMORY.ref(1, a0).offset(-0x1L).getSigned();",
        ]
    );
}

#[test]
fn test_memory_store() {
    // sw a1, 8(a0)
    assert_eq!(
        run(&[0xAC85_0008]),
        vec!["long a0;", "long a1;", "MEMORY.ref(4, a0).offset(0x8L).setu(a1);"]
    );
}

#[test]
fn test_cop2_transfers_and_commands() {
    // mfc2 v0, 9; cop2 0x180001
    assert_eq!(
        run(&[0x4802_4800, 0x4A18_0001]),
        vec!["long v0;", "v0 = CPU.MFC2(9);", "CPU.COP2(0x180001L);"]
    );
}

#[test]
fn test_lwc2_does_not_touch_gpr() {
    // lwc2 9, 4(a0)
    assert_eq!(
        run(&[0xC889_0004]),
        vec!["long a0;", "CPU.MTC2(MEMORY.ref(4, a0).offset(0x4L).get(), 9);"]
    );
}

#[test]
fn test_syscall() {
    assert_eq!(run(&[0x0000_000C]), vec!["CPU.SYSCALL(0x0);"]);
}

#[test]
fn test_unsupported_opcode_is_placeholder() {
    // lwl v0, 0(a0)
    assert_eq!(
        run(&[0x8882_0000]),
        vec!["// Unsupported operation LWL at address 80010000"]
    );
}

#[test]
fn test_cpu_state_style() {
    let config = TranslatorConfig::default().with_register_style(RegisterStyle::CpuState);
    let lines = translate(&[(BASE, 0x00A0_1021)], &config).unwrap();
    assert_eq!(lines, vec!["CPU.v0().value = CPU.a1().value;"]);
}

#[test]
fn test_unreferenced_registers_are_not_declared() {
    let lines = run(&[0x2404_0010]);
    assert!(!lines.iter().any(|line| line == "long v0;"));
    assert!(!lines.iter().any(|line| line == "long zero;"));
}

#[test]
fn test_decode_error_aborts_run() {
    let pairs = [(BASE, 0x2404_0010), (BASE + 4, 0xFC00_0000)];
    assert!(translate(&pairs, &TranslatorConfig::default()).is_err());
}
