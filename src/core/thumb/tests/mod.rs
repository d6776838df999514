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

//! Thumb test modules
//!
//! - `decode`: Format table order and the long branch pair
//! - `alu`: THUMB1-THUMB5
//! - `memory`: THUMB6-THUMB15
//! - `branch`: THUMB16-THUMB19

#[cfg(test)]
mod decode;




use super::translate;
use crate::core::config::TranslatorConfig;

pub(super) const BASE: u32 = 0x0800_0100;

/// Lay words out from [`BASE`], two bytes apart or four for a BL/BLX pair
fn layout(words: &[u32]) -> Vec<(u32, u32)> {
    let mut address = BASE;
    words
        .iter()
        .map(|&word| {
            let pair = (address, word);
            address += if word > 0xFFFF { 4 } else { 2 };
            pair
        })
        .collect()
}

pub(super) fn run(words: &[u32]) -> Vec<String> {
    try_run(words).unwrap()
}

pub(super) fn try_run(words: &[u32]) -> crate::core::Result<Vec<String>> {
    translate(&layout(words), &TranslatorConfig::default())
}
