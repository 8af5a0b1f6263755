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

//! The card reader (sequential input) and paper tape (sequential output).
//!
//! Deck lines are text, one card per line: either a bare signed decimal integer
//! (a raw word, masked to 48 bits), or a mnemonic `OP` / `OP OPERAND` with a
//! decimal or `0x`-prefixed hex operand. The paper tape is one signed decimal
//! word per line, in write order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::cpu::decode::Opcode;
use super::error::{EmulatorError, Result};
use super::word;

/// Forward-only source of instruction/data words, fed from a deck text file.
pub struct CardReader {
    lines: std::io::Lines<BufReader<File>>,
}

impl CardReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| EmulatorError::Setup {
            what: "card reader deck",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }

    /// Read the next card, parsing it into a word. Returns `Ok(None)` at
    /// end-of-deck. Blank lines are skipped rather than treated as cards.
    pub fn next_card(&mut self) -> Result<Option<u64>> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return parse_card_line(trimmed).map(Some);
        }
    }
}

fn parse_card_line(line: &str) -> Result<u64> {
    let mut parts = line.split_whitespace();
    let first = parts.next().expect("line is non-empty after trim");

    if let Some(opcode) = Opcode::from_mnemonic(first) {
        let operand = match parts.next() {
            Some(operand_str) => parse_operand(line, operand_str)?,
            None => 0,
        };
        return Ok(word::encode(opcode as u8, operand));
    }

    let value: i64 = first
        .parse()
        .map_err(|_| EmulatorError::DeckParse { line: line.to_string() })?;
    Ok(word::mask_signed(value))
}

fn parse_operand(line: &str, token: &str) -> Result<u64> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .map_err(|_| EmulatorError::DeckParse { line: line.to_string() });
    }
    let value: i64 = token
        .parse()
        .map_err(|_| EmulatorError::DeckParse { line: line.to_string() })?;
    Ok(word::mask_signed(value) & 0xFF_FFFF_FFFF)
}

/// Forward-only sink of paper-tape words, rendered as signed decimal text.
pub struct PaperTape {
    writer: BufWriter<File>,
}

impl PaperTape {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| EmulatorError::Setup {
            what: "paper tape output",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append `value` to the paper tape as one signed-decimal line. A failure
    /// here is I/O-mid-run: logged and dropped, never fatal.
    pub fn write_word(&mut self, value: u64) {
        if let Err(e) = writeln!(self.writer, "{}", word::sign_extend(value)) {
            log::warn!("paper tape write failed: {}", e);
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn reader_from(contents: &str) -> CardReader {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), contents).unwrap();
        CardReader::open(tmp.path()).unwrap()
    }

    #[test]
    fn parses_bare_decimal_and_negative_words() {
        let mut r = reader_from("42\n-1\n");
        assert_eq!(r.next_card().unwrap(), Some(42));
        assert_eq!(r.next_card().unwrap(), Some(word::WORD_MASK));
        assert_eq!(r.next_card().unwrap(), None);
    }

    #[test]
    fn parses_mnemonic_with_decimal_and_hex_operand() {
        let mut r = reader_from("TXR 10\nLOAD_R1 0x1A\nHALT\n");
        assert_eq!(r.next_card().unwrap(), Some(word::encode(Opcode::Txr as u8, 10)));
        assert_eq!(
            r.next_card().unwrap(),
            Some(word::encode(Opcode::LoadR1 as u8, 0x1A))
        );
        assert_eq!(r.next_card().unwrap(), Some(word::encode(Opcode::Halt as u8, 0)));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut r = reader_from("\n\n42\n\n");
        assert_eq!(r.next_card().unwrap(), Some(42));
        assert_eq!(r.next_card().unwrap(), None);
    }

    #[test]
    fn malformed_line_is_reported() {
        let mut r = reader_from("not_a_word\n");
        assert!(matches!(r.next_card(), Err(EmulatorError::DeckParse { .. })));
    }

    #[test]
    fn paper_tape_renders_signed_decimal() {
        let tmp = NamedTempFile::new().unwrap();
        {
            let mut tape = PaperTape::create(tmp.path()).unwrap();
            tape.write_word(42);
            tape.write_word(word::WORD_MASK); // -1
            tape.flush().unwrap();
        }
        let mut contents = String::new();
        File::open(tmp.path()).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "42\n-1\n");
    }
}
