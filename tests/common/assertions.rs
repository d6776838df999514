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

//! Custom assertions for translated output

/// Assert that no line declares a register or variable
#[allow(dead_code)]
pub fn assert_no_declarations(lines: &[String]) {
    for line in lines {
        assert!(
            !line.starts_with("int ") && !line.starts_with("long "),
            "Unexpected declaration: {:?}",
            line
        );
    }
}

/// Assert that `label` is both defined and referenced exactly once
#[allow(dead_code)]
pub fn assert_label_round_trip(lines: &[String], label: &str) {
    let marker = format!("//{}", label);
    let reference = format!("{};", label);

    let defined = lines.iter().filter(|line| line.contains(&marker)).count();
    let referenced = lines.iter().filter(|line| line.contains(&reference)).count();

    assert_eq!(defined, 1, "Label {} defined {} times in {:#?}", label, defined, lines);
    assert_eq!(
        referenced, 1,
        "Label {} referenced {} times in {:#?}",
        label, referenced, lines
    );
}
