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
use crate::core::system::Peripherals;

impl Cpu {
    /// LOAD_R1: R1 <- scratchpad[op]
    pub(in crate::core::cpu) fn op_load_r1(&mut self, operand: u64, io: &mut Peripherals) {
        self.r1 = io.scratchpad.read(operand);
    }

    /// LOAD_R2: R2 <- scratchpad[op]
    pub(in crate::core::cpu) fn op_load_r2(&mut self, operand: u64, io: &mut Peripherals) {
        self.r2 = io.scratchpad.read(operand);
    }

    /// LOAD_R3: R3 <- scratchpad[op]
    pub(in crate::core::cpu) fn op_load_r3(&mut self, operand: u64, io: &mut Peripherals) {
        self.r3 = io.scratchpad.read(operand);
    }

    /// STORE_R1: scratchpad[op] <- R1
    pub(in crate::core::cpu) fn op_store_r1(&mut self, operand: u64, io: &mut Peripherals) {
        io.scratchpad.write(operand, self.r1);
    }

    /// STORE_R3: scratchpad[op] <- R3
    pub(in crate::core::cpu) fn op_store_r3(&mut self, operand: u64, io: &mut Peripherals) {
        io.scratchpad.write(operand, self.r3);
    }

    pub(in crate::core::cpu) fn op_clear_r1(&mut self) {
        self.r1 = 0;
    }

    pub(in crate::core::cpu) fn op_clear_r2(&mut self) {
        self.r2 = 0;
    }

    pub(in crate::core::cpu) fn op_clear_r3(&mut self) {
        self.r3 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::system::test_peripherals;

    #[test]
    fn load_and_store_round_trip_through_scratchpad() {
        let mut cpu = Cpu::new();
        let mut io = test_peripherals();
        io.scratchpad.write(7, 123);

        cpu.op_load_r1(7, &mut io);
        assert_eq!(cpu.r1, 123);

        cpu.r1 = 55;
        cpu.op_store_r1(8, &mut io);
        assert_eq!(io.scratchpad.read(8), 55);
    }

    #[test]
    fn clear_zeroes_the_named_register() {
        let mut cpu = Cpu::new();
        cpu.r1 = 1;
        cpu.r2 = 2;
        cpu.r3 = 3;
        cpu.op_clear_r1();
        cpu.op_clear_r2();
        cpu.op_clear_r3();
        assert_eq!((cpu.r1, cpu.r2, cpu.r3), (0, 0, 0));
    }
}
