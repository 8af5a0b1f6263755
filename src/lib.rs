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

//! Simulator core library for a small fixed-point, tape-oriented stored-program
//! computer.
//!
//! The simulator bootstraps itself from a punched-card deck into a writable
//! scratchpad tape, transfers control to the loaded program, and thereafter
//! executes instructions from the scratchpad. A read-only library tape supplies
//! subroutines materialised into the scratchpad on demand by `CALL`.
//!
//! # Example
//!
//! ```no_run
//! use punchvm::core::system::{System, PeripheralPaths};
//!
//! let paths = PeripheralPaths {
//!     scratchpad: "scratchpad.bin".into(),
//!     library: None,
//!     deck: "deck.txt".into(),
//!     output: "output.txt".into(),
//! };
//! let mut system = System::open(&paths).unwrap();
//! let _exit_code = system.run().unwrap();
//! ```

pub mod core;
