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

//! The simulator's error type.
//!
//! Only conditions that `spec.md` §7 classifies as fatal (Setup, Decode, and a
//! malformed deck line) are represented here. Divide-by-zero and CALL without a
//! library are not errors: they are recovered locally and only logged.

use std::io;
use std::path::PathBuf;

/// Errors that abort the simulation.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    /// A required tape could not be opened before execution began.
    #[error("failed to open {what} at {path}: {source}")]
    Setup {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The control unit fetched a word whose opcode is not in the instruction set.
    #[error("unknown opcode {opcode} at scratchpad[{pc}]")]
    UnknownOpcode { opcode: u8, pc: u64 },

    /// A deck or library-source line could not be parsed into a word.
    #[error("malformed deck line {line:?}")]
    DeckParse { line: String },

    /// Any other I/O failure not covered by a more specific variant above.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, EmulatorError>;
