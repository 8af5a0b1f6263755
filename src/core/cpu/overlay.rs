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

//! The CALL overlay installer.
//!
//! Resolves the cyclic relationship between the control unit (which owns PC)
//! and the installer (which needs PC) by making installation a pure function of
//! `(pc, operand, library)` that returns the set of scratchpad writes; the
//! control unit applies them. This keeps every CALL-triggered scratchpad
//! mutation inside a single, uninterrupted step — no partially-installed
//! overlay is ever visible to the fetch step.

use super::decode::Opcode;
use crate::core::tape::WordTape;
use crate::core::word;

/// A library routine longer than this without reaching RET is treated as
/// malformed; this bounds the installer against an unterminated routine rather
/// than looping forever. `spec.md` does not specify a limit.
const MAX_OVERLAY_WORDS: u64 = 1 << 20;

/// The scratchpad writes CALL must apply, in application order.
pub struct OverlayPlan {
    pub writes: Vec<(u64, u64)>,
}

/// Compute the overlay installation for `CALL` with the given `operand`,
/// executed while PC holds `pc`. Returns `None` if the routine never reaches a
/// RET within `MAX_OVERLAY_WORDS`.
pub fn plan_call(pc: u64, operand: u64, library: &mut WordTape) -> Option<OverlayPlan> {
    let lib_start = (operand >> 24) & 0xFFFF;
    let dest_start = operand & 0xFF_FFFF;

    let mut writes = Vec::new();
    let mut lib_pos = lib_start;
    let mut dest_pos = dest_start;

    for _ in 0..MAX_OVERLAY_WORDS {
        let word = library.read(lib_pos);
        let (opcode, _) = word::decode(word);

        if opcode == Opcode::Ret as u8 {
            let ret_pc = pc + 1;
            writes.push((dest_pos, word::encode(Opcode::Txr as u8, ret_pc)));
            writes.push((pc, word::encode(Opcode::Txr as u8, dest_start)));
            return Some(OverlayPlan { writes });
        }

        writes.push((dest_pos, word));
        lib_pos += 1;
        dest_pos += 1;
    }

    log::warn!(
        "CALL library routine at {} did not reach RET within {} words",
        lib_start,
        MAX_OVERLAY_WORDS
    );
    None
}
