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

use super::super::overlay;
use super::super::Cpu;
use crate::core::system::Peripherals;

impl Cpu {
    /// CALL: materialise a library routine into the scratchpad and patch the
    /// call site, per the overlay installer (`overlay::plan_call`). With no
    /// library tape, CALL is a reported no-op rather than fatal.
    pub(in crate::core::cpu) fn op_call(&mut self, operand: u64, io: &mut Peripherals) {
        let Some(library) = io.library.as_mut() else {
            log::warn!("CALL executed with no library tape attached; treated as a no-op");
            return;
        };

        if let Some(plan) = overlay::plan_call(self.pc(), operand, library) {
            for (index, word) in plan.writes {
                io.scratchpad.write(index, word);
            }
        }
    }
}
