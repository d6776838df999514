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

//! ARM test modules
//!
//! - `decode`: Pattern priority and decode failures
//! - `data_processing`: ALU operations, shifter operands, PSR transfers
//! - `memory`: Single, halfword, swap and block transfers
//! - `control`: Predication, branches, calls and SWI


#[cfg(test)]
mod data_processing;


#[cfg(test)]
mod control;

use super::translate;
use crate::core::config::TranslatorConfig;

pub(super) const BASE: u32 = 0x0800_0100;

/// Translate consecutive words starting at [`BASE`]
pub(super) fn run(words: &[u32]) -> Vec<String> {
    try_run(words).unwrap()
}

pub(super) fn try_run(words: &[u32]) -> crate::core::Result<Vec<String>> {
    let pairs: Vec<(u32, u32)> = words
        .iter()
        .enumerate()
        .map(|(i, &word)| (BASE + 4 * i as u32, word))
        .collect();
    translate(&pairs, &TranslatorConfig::default())
}
