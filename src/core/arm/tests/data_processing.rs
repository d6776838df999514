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
use crate::core::arm::translate;
use crate::core::config::{RegisterStyle, TranslatorConfig};
use crate::core::error::TranslateError;

#[test]
fn test_mov_immediate_does_not_touch_rn() {
    // mov r0, #1
    assert_eq!(run(&[0xE3A0_0001]), vec!["int r0;", "r0 = 0x1;"]);
}

#[test]
fn test_add_registers() {
    // add r0, r1, r2
    assert_eq!(
        run(&[0xE081_0002]),
        vec!["int r0;", "int r1;", "int r2;", "r0 = r1 + r2;"]
    );
}

#[test]
fn test_flag_setting_add_with_shift() {
    // adds r0, r1, r2, lsl #2
    assert_eq!(
        run(&[0xE091_0102])[3],
        "r0 = CPU.addA(r1, (r2 << 2));"
    );
}

#[test]
fn test_flag_setting_move_emits_shifter_carry() {
    // movs r0, r1, lsr #1
    assert_eq!(
        run(&[0xE1B0_00A1]),
        vec![
            "int r0;",
            "int r1;",
            "CPU.setCFlag((r1 & 0x1) != 0);\nr0 = CPU.movA((r1 >>> 1));",
        ]
    );
}

#[test]
fn test_rrx_keeps_old_carry() {
    // movs r0, r1, rrx
    assert_eq!(
        run(&[0xE1B0_0061])[2],
        "final boolean oldCarry8000100 = CPU.cpsr().getCarry();\n\
         CPU.setCFlag((r1 & 0x1) != 0);\n\
         r0 = CPU.movA(((oldCarry8000100 ? 0x8000_0000 : 0) | r1 >>> 1));"
    );
}

#[test]
fn test_lsr_zero_shifts_by_32() {
    // mov r0, r1, lsr #32
    assert_eq!(run(&[0xE1A0_0021])[2], "r0 = 0;");
}

#[test]
fn test_register_specified_shift_guards_carry() {
    // movs r0, r1, lsl r2
    assert_eq!(
        run(&[0xE1B0_0211])[3],
        "if(r2 != 0) {\n  CPU.setCFlag((r1 & 1 << 32 - r2) != 0);\n}\nr0 = CPU.movA((r1 << r2));"
    );
}

#[test]
fn test_rotated_immediate_carry_follows_statement() {
    // ands r0, r0, #0x80000000
    assert_eq!(
        run(&[0xE210_0102]),
        vec!["int r0;", "r0 = CPU.andA(r0, 0x80000000);\nCPU.setCFlag(true);"]
    );
}

#[test]
fn test_pc_operand_is_address_plus_8() {
    // add r0, pc, #8
    assert_eq!(run(&[0xE28F_0008]), vec!["int r0;", "r0 = 0x8000108 + 0x8;"]);
}

#[test]
fn test_compare_has_no_assignment() {
    // cmp r0, #0
    assert_eq!(run(&[0xE350_0000]), vec!["int r0;", "CPU.cmpA(r0, 0x0);"]);
}

#[test]
fn test_carry_operations() {
    // adc r0, r0, r1
    assert_eq!(
        run(&[0xE0A0_0001])[2],
        "r0 = r0 + r1 + (CPU.cpsr().getCarry() ? 1 : 0);"
    );
    // rsb r0, r0, #0
    assert_eq!(run(&[0xE260_0000])[1], "r0 = 0x0 - r0;");
}

#[test]
fn test_flag_setting_pc_write_restores_psr() {
    // subs pc, lr, #4
    assert_eq!(
        run(&[0xE25E_F004]),
        vec!["int lr;", "int pc;", "pc = CPU.subA(lr, 0x4);\nCPU.restorePsr();"]
    );
}

#[test]
fn test_mov_pc_lr_returns() {
    assert_eq!(run(&[0xE1A0_F00E]), vec!["int r0;", "return r0;"]);
}

#[test]
fn test_psr_transfers() {
    // mrs r0, cpsr
    assert_eq!(run(&[0xE10F_0000])[1], "r0 = CPU.cpsr().get();");
    // mrs r0, spsr
    assert_eq!(run(&[0xE14F_0000])[1], "r0 = CPU.spsr().get();");
    // msr cpsr_c, r0
    assert_eq!(
        run(&[0xE121_F000])[1],
        "CPU.cpsr().msr(r0, false, false, false, true);"
    );
    // msr cpsr_f, #0xf0000000
    assert_eq!(
        run(&[0xE328_F20F]),
        vec!["CPU.cpsr().msr(0xf0000000, true, false, false, false);"]
    );
}

#[test]
fn test_multiply() {
    // mul r0, r1, r2
    assert_eq!(run(&[0xE000_0291])[3], "r0 = r1 * r2;");
    // mla r0, r1, r2, r3
    assert_eq!(run(&[0xE020_3291])[4], "r0 = r1 * r2 + r3;");
    // muls r0, r1, r2
    assert_eq!(run(&[0xE010_0291])[3], "r0 = CPU.mulA(r1, r2);");
}

#[test]
fn test_long_multiply() {
    // umull r0, r1, r2, r3
    assert_eq!(
        run(&[0xE081_0392])[4],
        "final long result8000100 = (r2 & 0xffff_ffffL) * (r3 & 0xffff_ffffL);\n\
         r0 = (int)result8000100;\n\
         r1 = (int)(result8000100 >>> 32);"
    );
    // smlal r0, r1, r2, r3
    assert_eq!(
        run(&[0xE0E1_0392])[4],
        "final long result8000100 = (long)r2 * r3 + ((long)r1 << 32 | r0 & 0xffff_ffffL);\n\
         r0 = (int)result8000100;\n\
         r1 = (int)(result8000100 >>> 32);"
    );
}

#[test]
fn test_flag_setting_long_multiply_is_unsupported() {
    // umulls r0, r1, r2, r3
    let err = try_run(&[0xE091_0392]).unwrap_err();
    assert!(matches!(err, TranslateError::Unsupported { address: BASE, .. }));
}

#[test]
fn test_cpu_state_registers() {
    let config = TranslatorConfig::default().with_register_style(RegisterStyle::CpuState);
    let lines = translate(&[(BASE, 0xE081_0002)], &config).unwrap();
    assert_eq!(lines, vec!["CPU.r0().value = CPU.r1().value + CPU.r2().value;"]);
}
