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

//! Per-run output bookkeeping shared by all three translators
//!
//! An [`Output`] owns everything one `translate` call accumulates:
//! - the address → text map, merged in place as control flow is rebuilt
//! - the set of label addresses hit by in-range branches
//! - the set of touched registers, used to synthesize declarations
//! - synthetic scratch variables (MIPS stack slots)

use super::config::TranslatorConfig;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// A register that can appear in a declaration line
pub trait Declarable: Copy + Ord {
    /// Symbolic name used in the pseudocode
    fn name(self) -> &'static str;

    /// True for a register that always reads zero and can never be assigned
    fn is_hardwired_zero(self) -> bool {
        false
    }
}

/// How addresses are printed in label and function names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// Lower-case hex without padding (`LAB_80010010`, `LAB_10`)
    Plain,
    /// Lower-case hex padded to seven digits (`LAB_8000104`)
    Padded,
}

impl AddressFormat {
    /// Format an address
    pub fn format(self, address: u32) -> String {
        match self {
            AddressFormat::Plain => format!("{:x}", address),
            AddressFormat::Padded => format!("{:07x}", address),
        }
    }
}

/// Resolution of a branch destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// In-range destination, reached through a local label
    Label(String),
    /// Out-of-range destination, reached by calling a synthesized function
    External(String),
}

/// Translation state for a single run
pub struct Output<R: Declarable> {
    lines: BTreeMap<u32, String>,
    labels: BTreeSet<u32>,
    registers: BTreeSet<R>,
    variables: BTreeSet<String>,
    range: RangeInclusive<u32>,
    format: AddressFormat,
    config: TranslatorConfig,
}

impl<R: Declarable> Output<R> {
    /// Create empty state for a run covering `range`
    ///
    /// # Arguments
    ///
    /// * `range` - First and last instruction address of the run
    /// * `format` - Address format for labels and functions
    /// * `config` - Translator configuration
    pub fn new(range: RangeInclusive<u32>, format: AddressFormat, config: &TranslatorConfig) -> Self {
        Self {
            lines: BTreeMap::new(),
            labels: BTreeSet::new(),
            registers: BTreeSet::new(),
            variables: BTreeSet::new(),
            range,
            format,
            config: config.clone(),
        }
    }

    /// Record a register as touched and return its rendered name
    pub fn reg(&mut self, register: R) -> String {
        self.touch(register);
        self.config.register_style.render(register.name())
    }

    /// Record a register as touched without rendering it
    pub fn touch(&mut self, register: R) {
        if !register.is_hardwired_zero() {
            self.registers.insert(register);
        }
    }

    /// Record a synthetic variable and return its name
    pub fn variable(&mut self, name: String) -> String {
        self.variables.insert(name.clone());
        name
    }

    /// Whether `address` lies inside the run
    pub fn in_range(&self, address: u32) -> bool {
        self.range.contains(&address)
    }

    /// Format an address the way labels and functions are named
    pub fn hex(&self, address: u32) -> String {
        self.format.format(address)
    }

    /// Name of the synthesized external function for `address`
    pub fn function(&self, address: u32) -> String {
        format!("FUN_{}", self.hex(address))
    }

    /// Resolve a branch destination, registering a label when in range
    pub fn branch_target(&mut self, address: u32) -> Target {
        if self.in_range(address) {
            self.labels.insert(address);
            Target::Label(format!("LAB_{}", self.hex(address)))
        } else {
            Target::External(self.function(address))
        }
    }

    /// Register `text` at `address`, replacing anything there
    pub fn put(&mut self, address: u32, text: String) {
        self.lines.insert(address, text);
    }

    /// Merge `text` into the entry at `address`
    ///
    /// `merge` receives the current text and returns the replacement. When
    /// nothing was emitted at `address` yet, `text` is inserted as is.
    pub fn merge<F>(&mut self, address: u32, text: String, merge: F)
    where
        F: FnOnce(&str, &str) -> String,
    {
        match self.lines.get_mut(&address) {
            Some(current) => *current = merge(current, &text),
            None => {
                self.lines.insert(address, text);
            }
        }
    }

    /// Prepend `text` (followed by a newline) to the entry at `address`
    pub fn prepend(&mut self, address: u32, text: String) {
        self.merge(address, text, |current, added| format!("{}\n{}", added, current));
    }

    /// Labels registered so far
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.labels.iter().copied()
    }

    /// Touched registers so far, in enumeration order
    pub fn registers(&self) -> impl Iterator<Item = R> + '_ {
        self.registers.iter().copied()
    }

    /// Assemble the final output
    ///
    /// Label markers are merge-prepended to their slots, then declarations
    /// (registers first, then variables) precede the code blocks in
    /// ascending address order.
    ///
    /// # Arguments
    ///
    /// * `register_type` - Type used for register declarations (`long`, `int`)
    pub fn finish(mut self, register_type: &str) -> Vec<String> {
        let labels: Vec<u32> = self.labels.iter().copied().collect();
        for address in labels {
            let marker = format!("\n//LAB_{}", self.hex(address));
            self.prepend(address, marker);
        }

        let mut output = Vec::with_capacity(
            self.registers.len() + self.variables.len() + self.lines.len(),
        );

        if self.config.declares_registers() {
            for register in &self.registers {
                output.push(format!("{} {};", register_type, register.name()));
            }
        }

        if self.config.declarations {
            let mut variables: Vec<&String> = self.variables.iter().collect();
            variables.sort_by(|a, b| frame_order(a).cmp(&frame_order(b)));
            for variable in variables {
                output.push(format!("long {};", variable));
            }
        }

        output.extend(self.lines.into_values());
        output
    }
}

/// Sort key for a variable name: its prefix, then its trailing hex offset
///
/// Keeps `sp4` ahead of `sp10`.
fn frame_order(name: &str) -> (&str, u64, &str) {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_hexdigit());
    let offset = u64::from_str_radix(&name[prefix.len()..], 16).unwrap_or(0);
    (prefix, offset, name)
}

/// Render a signed value as hex with an explicit sign (`0x10`, `-0x10`)
pub fn signed_hex(value: i64) -> String {
    if value < 0 {
        format!("-0x{:x}", value.unsigned_abs())
    } else {
        format!("0x{:x}", value)
    }
}

/// Indent every line of `text` by two spaces
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sign-extend the low `bits` bits of `value`
#[inline(always)]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}
