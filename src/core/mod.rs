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

//! Core simulation components
//!
//! - `word`: 48-bit fixed-point word algebra (mask, sign-extend, decode, encode).
//! - `tape`: word-indexed file-backed tape abstraction (scratchpad, library).
//! - `deck`: card reader and paper tape, the simulator's sequential text streams.
//! - `cpu`: register file, mode, and the instruction set's semantics.
//! - `system`: control unit main loop binding the CPU to its peripherals.
//! - `error`: the crate's error type.

pub mod cpu;
pub mod deck;
pub mod error;
pub mod system;
pub mod tape;
pub mod word;

pub use cpu::Cpu;
pub use error::{EmulatorError, Result};
pub use system::System;
