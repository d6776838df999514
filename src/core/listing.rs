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

//! Disassembly listing lexer
//!
//! Extracts `(address, word)` pairs from a textual listing such as
//!
//! ```text
//!         ram:80010000 21 10 a0 00     move   v0,a1
//!         LAB_80010004::80010004 08 00 e0 03     jr     ra
//! ```
//!
//! Lines that do not start with an address followed by byte columns are
//! skipped, so headers, labels and comments in the listing are ignored.

use super::Isa;

/// Parse a listing into `(address, word)` pairs
///
/// # Arguments
///
/// * `text` - Listing text
/// * `isa` - Instruction set, which decides how many byte columns make a word
///
/// # Returns
///
/// Pairs in listing order. Bytes are reassembled little-endian
/// (`byte[last]..byte[first]`).
///
/// # Example
/// ```
/// use asmlift::core::listing::parse_listing;
/// use asmlift::core::Isa;
///
/// let pairs = parse_listing("  80010000 21 10 a0 00  move v0,a1", Isa::Mips);
/// assert_eq!(pairs, vec![(0x8001_0000, 0x00A0_1021)]);
/// ```
pub fn parse_listing(text: &str, isa: Isa) -> Vec<(u32, u32)> {
    let pairs: Vec<(u32, u32)> = text.lines().filter_map(|line| parse_line(line, isa)).collect();
    log::debug!("Listing yielded {} {} instructions", pairs.len(), isa);
    pairs
}

/// Parse a single listing line
pub fn parse_line(line: &str, isa: Isa) -> Option<(u32, u32)> {
    let mut tokens = line.split_whitespace();
    let address = parse_address(tokens.next()?)?;

    let (min, max) = match isa {
        Isa::Mips | Isa::Arm => (4, 4),
        Isa::Thumb => (1, 4),
    };

    let bytes: Vec<u8> = tokens.map_while(parse_byte).take(max).collect();
    if bytes.len() < min {
        return None;
    }

    let word = bytes
        .iter()
        .rev()
        .fold(0u32, |word, &byte| (word << 8) | byte as u32);

    Some((address, word))
}

/// Parse an address column, optionally prefixed by `name:` or `name::`
fn parse_address(token: &str) -> Option<u32> {
    let digits = match token.rfind(':') {
        Some(colon) => {
            let prefix = token[..colon].strip_suffix(':').unwrap_or(&token[..colon]);
            if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return None;
            }
            &token[colon + 1..]
        }
        None => token,
    };

    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}

/// Parse a two-digit byte column
fn parse_byte(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(token, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mips_line() {
        let pair = parse_line("        80010000 21 10 a0 00     move v0,a1", Isa::Mips);
        assert_eq!(pair, Some((0x8001_0000, 0x00A0_1021)));
    }

    #[test]
    fn test_prefixed_addresses() {
        assert_eq!(
            parse_line("  ram:80010000 08 00 e0 03", Isa::Mips),
            Some((0x8001_0000, 0x03E0_0008))
        );
        assert_eq!(
            parse_line("  LAB_x::80010000 08 00 e0 03", Isa::Mips),
            Some((0x8001_0000, 0x03E0_0008))
        );
        assert_eq!(parse_line("  a-b:80010000 08 00 e0 03", Isa::Mips), None);
    }

    #[test]
    fn test_uppercase_hex() {
        assert_eq!(
            parse_line(" 0800010A FE E7", Isa::Thumb),
            Some((0x0800_010A, 0xE7FE))
        );
    }

    #[test]
    fn test_arm_requires_four_bytes() {
        assert_eq!(parse_line(" 08000100 00 00", Isa::Arm), None);
        assert_eq!(
            parse_line(" 08000100 1e ff 2f e1 aa bb", Isa::Arm),
            Some((0x0800_0100, 0xE12F_FF1E))
        );
    }

    #[test]
    fn test_thumb_is_greedy() {
        assert_eq!(parse_line(" 08000100 70 47 bx lr", Isa::Thumb), Some((0x0800_0100, 0x4770)));
        assert_eq!(
            parse_line(" 08000100 00 f0 08 f8 bl FUN_08000114", Isa::Thumb),
            Some((0x0800_0100, 0xF808_F000))
        );
    }

    #[test]
    fn test_non_instruction_lines_are_skipped() {
        let text = "\
                             FUN_80010000\n\
            ; a comment line\n\
                80010000 21 10 a0 00     move v0,a1\n\
            \n\
                8001000 21 10 a0 00\n";
        assert_eq!(parse_listing(text, Isa::Mips), vec![(0x8001_0000, 0x00A0_1021)]);
    }
}
