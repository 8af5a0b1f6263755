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

//! Word-indexed, file-backed tape: the scratchpad and library storage.
//!
//! Word *i* lives at byte offset `8 * i` as a little-endian 8-byte value holding
//! a 48-bit word in its low bits. Reading an index never written returns zero;
//! writing extends the backing file with zeros as needed. Opening the backing
//! file is the only fallible operation — a failed read or write mid-run is
//! logged and treated as zero/dropped rather than propagated, per the
//! best-effort I/O policy in `spec.md` §7.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::error::{EmulatorError, Result};

const WORD_BYTES: u64 = 8;

/// A random-access, word-indexed tape backed by a file.
pub struct WordTape {
    file: File,
    label: &'static str,
}

impl WordTape {
    /// Open a tape for both reading and writing, creating it if absent. Used for
    /// the scratchpad, which is written to by the running program.
    pub fn open_read_write(label: &'static str, path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .map_err(|source| EmulatorError::Setup {
                what: label,
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { file, label })
    }

    /// Open a tape for reading only. Used for the library, which the simulator
    /// never writes to.
    pub fn open_read_only(label: &'static str, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| EmulatorError::Setup {
            what: label,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file, label })
    }

    /// Read the word at `index`, or zero if the position was never written.
    pub fn read(&mut self, index: u64) -> u64 {
        match self.try_read(index) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{} tape read at {} failed: {}", self.label, index, e);
                0
            }
        }
    }

    /// Write `value` at `index`, extending the backing file with zeros as needed.
    /// A failure is logged and dropped, never propagated.
    pub fn write(&mut self, index: u64, value: u64) {
        if let Err(e) = self.try_write(index, value) {
            log::warn!("{} tape write at {} failed: {}", self.label, index, e);
        }
    }

    fn try_read(&mut self, index: u64) -> io::Result<u64> {
        self.file.seek(SeekFrom::Start(index * WORD_BYTES))?;
        let mut buf = [0u8; 8];
        match self.file.read_exact(&mut buf) {
            Ok(()) => Ok(u64::from_le_bytes(buf)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn try_write(&mut self, index: u64, value: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(index * WORD_BYTES))?;
        self.file.write_all(&(value & super::word::WORD_MASK).to_le_bytes())
    }
}
