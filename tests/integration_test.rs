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

mod common;

use asmlift::core::listing::parse_listing;
use asmlift::core::{translate, Isa, RegisterStyle, Result, TranslateError, TranslatorConfig};
use common::assertions::{assert_label_round_trip, assert_no_declarations};
use common::fixtures::{ARM_LOOP, MIPS_LOOP, NO_CODE, THUMB_FUNCTION};
use std::io::Write;

fn lift(text: &str, isa: Isa, config: &TranslatorConfig) -> Result<Vec<String>> {
    translate(isa, &parse_listing(text, isa), config)
}

#[test]
fn test_mips_listing_end_to_end() -> Result<()> {
    let lines = lift(MIPS_LOOP, Isa::Mips, &TranslatorConfig::default())?;

    assert_eq!(
        lines,
        vec![
            "long a0;",
            "long a1;",
            "long ra;",
            "\n//LAB_80010000\na0 = a0 + 0x1L;",
            "if(a0 != a1) {\n  LAB_80010000;\n}",
            "return;",
        ]
    );
    assert_label_round_trip(&lines, "LAB_80010000");
    Ok(())
}

#[test]
fn test_arm_listing_end_to_end() -> Result<()> {
    let lines = lift(ARM_LOOP, Isa::Arm, &TranslatorConfig::default())?;

    assert_eq!(
        lines,
        vec![
            "int r0;",
            "\n//LAB_8000100\nr0 = 0x1;",
            "if(!CPU.cpsr().getZero()) { // !=\n  LAB_8000100;\n}",
            "return r0;",
        ]
    );
    assert_label_round_trip(&lines, "LAB_8000100");
    Ok(())
}

#[test]
fn test_thumb_listing_end_to_end() -> Result<()> {
    let lines = lift(THUMB_FUNCTION, Isa::Thumb, &TranslatorConfig::default())?;

    assert_eq!(
        lines,
        vec![
            "int r0;",
            "int r4;",
            "int r5;",
            "int lr;",
            "int pc;",
            "CPU.push(lr);\nCPU.push(r5);\nCPU.push(r4);",
            "r0 = CPU.movT(0, 0x0);",
            "r0 = FUN_8000118();",
            "r4 = CPU.pop();\nr5 = CPU.pop();\npc = CPU.pop();",
        ]
    );
    Ok(())
}

#[test]
fn test_empty_listing_translates_to_nothing() -> Result<()> {
    for isa in [Isa::Mips, Isa::Arm, Isa::Thumb] {
        assert!(parse_listing(NO_CODE, isa).is_empty());
        assert!(lift(NO_CODE, isa, &TranslatorConfig::default())?.is_empty());
    }
    Ok(())
}

#[test]
fn test_cpu_state_style() -> Result<()> {
    let config = TranslatorConfig::default().with_register_style(RegisterStyle::CpuState);
    let lines = lift(MIPS_LOOP, Isa::Mips, &config)?;

    assert_no_declarations(&lines);
    assert_eq!(
        lines[0],
        "\n//LAB_80010000\nCPU.a0().value = CPU.a0().value + 0x1L;"
    );
    assert_eq!(
        lines[1],
        "if(CPU.a0().value != CPU.a1().value) {\n  LAB_80010000;\n}"
    );
    Ok(())
}

#[test]
fn test_config_file_drives_translation() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "register-style = \"cpu-state\"")?;

    let config = TranslatorConfig::load(file.path())?;
    let lines = lift(ARM_LOOP, Isa::Arm, &config)?;

    assert_no_declarations(&lines);
    assert_eq!(lines[0], "\n//LAB_8000100\nCPU.r0().value = 0x1;");
    Ok(())
}

#[test]
fn test_disabled_declarations() -> Result<()> {
    let config = TranslatorConfig::from_toml_str("declarations = false")?;
    let lines = lift(THUMB_FUNCTION, Isa::Thumb, &config)?;

    assert_no_declarations(&lines);
    assert_eq!(lines.len(), 4);
    Ok(())
}

#[test]
fn test_wrong_isa_fails_with_address() {
    // The first MIPS word is not a valid Thumb long branch pair
    let err = lift(MIPS_LOOP, Isa::Thumb, &TranslatorConfig::default()).unwrap_err();
    assert_eq!(err.address(), Some(0x8001_0000));
}

#[test]
fn test_missing_config_is_io_error() {
    let err = TranslatorConfig::load("/nonexistent/asmlift.toml").unwrap_err();
    assert!(matches!(err, TranslateError::Io(_)));
}
