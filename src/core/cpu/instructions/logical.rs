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
use crate::core::word::WORD_MASK;

impl Cpu {
    /// AND: R1 <- r1 & r2, bitwise over the raw masked words.
    pub(in crate::core::cpu) fn op_and(&mut self) {
        self.r1 = (self.r1 & self.r2) & WORD_MASK;
    }

    /// OR: R1 <- r1 | r2
    pub(in crate::core::cpu) fn op_or(&mut self) {
        self.r1 = (self.r1 | self.r2) & WORD_MASK;
    }

    /// XOR: R1 <- r1 ^ r2
    pub(in crate::core::cpu) fn op_xor(&mut self) {
        self.r1 = (self.r1 ^ self.r2) & WORD_MASK;
    }
}
