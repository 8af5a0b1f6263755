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
use crate::core::word;

impl Cpu {
    /// SKIP: PC <- PC + 1, skipping the next instruction.
    pub(in crate::core::cpu) fn op_skip(&mut self) {
        self.advance_pc();
    }

    /// SKIP_Z: skip the next instruction if R1 = 0.
    pub(in crate::core::cpu) fn op_skip_z(&mut self) {
        if self.r1 == 0 {
            self.advance_pc();
        }
    }

    /// SKIP_NZ: skip the next instruction if R1 != 0.
    pub(in crate::core::cpu) fn op_skip_nz(&mut self) {
        if self.r1 != 0 {
            self.advance_pc();
        }
    }

    /// TXR: PC <- operand; also the one-way READ_IN -> EXECUTION trigger.
    pub(in crate::core::cpu) fn op_txr(&mut self, operand: u64) {
        self.enter_execution_mode();
        self.set_pc(operand);
    }

    /// RET: PC <- se(r3). Only reachable for a RET the programmer wrote
    /// explicitly; every RET materialised by an overlay is rewritten to a TXR
    /// during CALL, so this never observes an overlay-installed routine's
    /// terminal instruction.
    pub(in crate::core::cpu) fn op_ret(&mut self) {
        let target = word::sign_extend(self.r3);
        self.set_pc(target.max(0) as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_variants_advance_pc_conditionally() {
        let mut cpu = Cpu::new();
        cpu.set_pc(10);
        cpu.r1 = 0;
        cpu.op_skip_z();
        assert_eq!(cpu.pc(), 11);

        cpu.set_pc(10);
        cpu.op_skip_nz();
        assert_eq!(cpu.pc(), 10); // r1 == 0, no skip

        cpu.r1 = 5;
        cpu.op_skip_nz();
        assert_eq!(cpu.pc(), 11);
    }

    #[test]
    fn txr_sets_pc_and_switches_mode() {
        let mut cpu = Cpu::new();
        cpu.op_txr(42);
        assert_eq!(cpu.pc(), 42);
        assert_eq!(cpu.mode(), super::super::Mode::Execution);
    }

    #[test]
    fn ret_jumps_to_r3() {
        let mut cpu = Cpu::new();
        cpu.r3 = 77;
        cpu.op_ret();
        assert_eq!(cpu.pc(), 77);
    }
}
