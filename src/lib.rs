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

//! MIPS, ARM and Thumb to pseudocode translator
//!
//! This library decodes machine words from a disassembly listing and turns
//! them into C-like pseudocode: branch delay slots are rebuilt,
//! predicated ARM instructions become guarded blocks, in-range branch
//! targets become labels and every touched register is declared up front.
//!
//! # Example
//!
//! ```
//! use asmlift::core::{translate, Isa, TranslatorConfig};
//!
//! // Thumb `bx lr`
//! let lines = translate(Isa::Thumb, &[(0x0800_0100, 0x4770)], &TranslatorConfig::default())
//!     .unwrap();
//! assert_eq!(lines.last().map(String::as_str), Some("return r0;"));
//! ```

pub mod core;
