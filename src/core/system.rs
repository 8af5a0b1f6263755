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

//! The control unit's main loop, binding the CPU to its peripheral tapes.

use std::path::{Path, PathBuf};

use super::cpu::{Cpu, Mode, StepOutcome};
use super::deck::{CardReader, PaperTape};
use super::error::Result;
use super::tape::WordTape;

/// Every tape the simulator opens at startup, bundled behind one handle so
/// instruction dispatch takes a single mutable parameter rather than four.
pub struct Peripherals {
    pub scratchpad: WordTape,
    pub library: Option<WordTape>,
    pub card_reader: CardReader,
    pub paper_tape: PaperTape,
}

/// The file paths the simulator opens. Defaults match the fixed names the
/// original reference program used (`scratchpad.bin`, `library.bin`,
/// `output.txt`, `deck.txt`); here they are overridable rather than hardcoded.
#[derive(Debug, Clone)]
pub struct PeripheralPaths {
    pub scratchpad: PathBuf,
    pub library: Option<PathBuf>,
    pub deck: PathBuf,
    pub output: PathBuf,
}

impl Default for PeripheralPaths {
    fn default() -> Self {
        Self {
            scratchpad: PathBuf::from("scratchpad.bin"),
            library: None,
            deck: PathBuf::from("deck.txt"),
            output: PathBuf::from("output.txt"),
        }
    }
}

impl Peripherals {
    pub fn open(paths: &PeripheralPaths) -> Result<Self> {
        let scratchpad = WordTape::open_read_write("scratchpad", &paths.scratchpad)?;
        let library = paths
            .library
            .as_deref()
            .map(|path| WordTape::open_read_only("library", path))
            .transpose()?;
        let card_reader = CardReader::open(&paths.deck)?;
        let paper_tape = PaperTape::create(&paths.output)?;

        Ok(Self {
            scratchpad,
            library,
            card_reader,
            paper_tape,
        })
    }
}

/// The simulator: a CPU plus the tapes it reads and writes.
pub struct System {
    cpu: Cpu,
    io: Peripherals,
}

impl System {
    pub fn open(paths: &PeripheralPaths) -> Result<Self> {
        Ok(Self {
            cpu: Cpu::new(),
            io: Peripherals::open(paths)?,
        })
    }

    /// Run until HALT or end-of-deck. Returns the process exit code (always 0,
    /// per `spec.md` §4.4/§4.5 — both HALT and read-in EOF terminate normally).
    pub fn run(&mut self) -> Result<i32> {
        loop {
            match self.cpu.mode() {
                Mode::ReadIn => {
                    let Some(data_word) = self.io.card_reader.next_card()? else {
                        log::info!("end of deck reached during READ_IN; terminating normally");
                        self.io.paper_tape.flush()?;
                        return Ok(0);
                    };
                    self.cpu.r1 = data_word;

                    let Some(instruction) = self.io.card_reader.next_card()? else {
                        log::info!("end of deck reached during READ_IN; terminating normally");
                        self.io.paper_tape.flush()?;
                        return Ok(0);
                    };
                    if self.cpu.execute_instruction(instruction, &mut self.io)? == StepOutcome::Halt {
                        self.io.paper_tape.flush()?;
                        return Ok(0);
                    }
                }
                Mode::Execution => {
                    let instruction = self.io.scratchpad.read(self.cpu.pc());
                    self.cpu.advance_pc();
                    if self.cpu.execute_instruction(instruction, &mut self.io)? == StepOutcome::Halt {
                        self.io.paper_tape.flush()?;
                        return Ok(0);
                    }
                }
            }
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }
}

/// Build a `Peripherals` backed by throwaway temp files, for unit tests of
/// individual instruction handlers that need the `io` parameter but don't care
/// about persistence.
#[cfg(test)]
pub fn test_peripherals() -> Peripherals {
    let scratchpad = tempfile::NamedTempFile::new().unwrap();
    let deck = tempfile::NamedTempFile::new().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    Peripherals {
        scratchpad: WordTape::open_read_write("scratchpad", scratchpad.path()).unwrap(),
        library: None,
        card_reader: CardReader::open(deck.path()).unwrap(),
        paper_tape: PaperTape::create(output.path()).unwrap(),
    }
}
