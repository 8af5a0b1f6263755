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

use super::super::Cpu;
use crate::core::error::Result;
use crate::core::system::Peripherals;

impl Cpu {
    /// WRITE_PT: append R3 as a decimal signed word to the paper tape.
    pub(in crate::core::cpu) fn op_write_pt(&mut self, io: &mut Peripherals) {
        io.paper_tape.write_word(self.r3);
    }

    /// READ_CR: R3 <- next card word, or unchanged on end-of-deck.
    pub(in crate::core::cpu) fn op_read_cr(&mut self, io: &mut Peripherals) -> Result<()> {
        if let Some(word) = io.card_reader.next_card()? {
            self.r3 = word;
        }
        Ok(())
    }
}
