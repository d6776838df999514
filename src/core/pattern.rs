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

//! Ordered mask/value matching
//!
//! The ARM and Thumb encodings overlap: a branch-and-exchange word also fits
//! the generic data-processing layout, a SWI fits the conditional branch
//! group. Decoders therefore walk an ordered table and stop at the first
//! pattern whose masked bits equal its expected value. Table order is part of
//! the decoder contract.

/// One entry of a decode table
pub struct Pattern<Op: 'static> {
    /// Bits that take part in the comparison
    pub mask: u32,
    /// Required value of the masked bits
    pub expected: u32,
    /// Picks the opcode within the class, `None` for an undefined sub-encoding
    pub classify: fn(u32) -> Option<Op>,
}

impl<Op> Pattern<Op> {
    /// Whether `word` belongs to this pattern's class
    #[inline(always)]
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.expected
    }
}

/// Classify `word` with the first matching pattern
///
/// # Returns
///
/// - `None` when no pattern matches, or when the first matching pattern
///   rejects the sub-encoding (later patterns are not consulted)
pub fn first_match<Op>(patterns: &[Pattern<Op>], word: u32) -> Option<Op> {
    patterns
        .iter()
        .find(|pattern| pattern.matches(word))
        .and_then(|pattern| (pattern.classify)(word))
}
