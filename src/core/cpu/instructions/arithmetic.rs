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
    /// ADD: R1 <- mask(se(r1) + se(r2))
    pub(in crate::core::cpu) fn op_add(&mut self) {
        let sum = word::sign_extend(self.r1) + word::sign_extend(self.r2);
        self.r1 = word::mask_signed(sum);
    }

    /// NEG: R1 <- mask(-se(r1))
    pub(in crate::core::cpu) fn op_neg(&mut self) {
        self.r1 = word::mask_signed(-word::sign_extend(self.r1));
    }

    /// MULT: 96-bit signed product of R2*R3; R2 <- low 48 bits, R1 <- high 48
    /// bits (arithmetic shift).
    pub(in crate::core::cpu) fn op_mult(&mut self) {
        let product = (word::sign_extend(self.r2) as i128) * (word::sign_extend(self.r3) as i128);
        self.r2 = word::mask_signed128(product);
        self.r1 = word::mask_signed128(product >> 48);
    }

    /// DIV: truncating integer division; divide-by-zero leaves R1 unchanged and
    /// is not an error (`spec.md` §7).
    pub(in crate::core::cpu) fn op_div(&mut self) {
        let divisor = word::sign_extend(self.r2);
        if divisor == 0 {
            log::warn!("DIV by zero; R1 left unchanged");
            return;
        }
        let quotient = word::sign_extend(self.r1) / divisor;
        self.r1 = word::mask_signed(quotient);
    }

    /// ROUND: if bit 47 of R2 is set, R1 <- mask(se(r1) + 1); else no-op.
    pub(in crate::core::cpu) fn op_round(&mut self) {
        if self.r2 & word::SIGN_BIT != 0 {
            self.r1 = word::mask_signed(word::sign_extend(self.r1) + 1);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_wraps_on_overflow() {
        let mut cpu = Cpu::new();
        cpu.r1 = word::mask_signed((1i64 << 47) - 1); // max positive
        cpu.r2 = 1;
        cpu.op_add();
        assert_eq!(cpu.r1, word::SIGN_BIT); // wraps to most negative
    }

    #[test]
    fn neg_twice_restores_value_except_at_min() {
        let mut cpu = Cpu::new();
        cpu.r1 = word::mask_signed(41);
        cpu.op_neg();
        cpu.op_neg();
        assert_eq!(cpu.r1, word::mask_signed(41));
    }

    #[test]
    fn mult_sign_scenario_from_spec() {
        // R2 = -1, R3 = 2 => (R1,R2) as 96-bit signed == -2
        let mut cpu = Cpu::new();
        cpu.r2 = word::WORD_MASK; // -1
        cpu.r3 = 2;
        cpu.op_mult();
        let combined = ((cpu.r1 as i128) << 48) | (cpu.r2 as i128);
        let signed = if combined & (1i128 << 95) != 0 {
            combined | !((1i128 << 96) - 1)
        } else {
            combined
        };
        assert_eq!(signed, -2);
    }

    #[test]
    fn div_by_zero_leaves_r1_unchanged() {
        let mut cpu = Cpu::new();
        cpu.r1 = 7;
        cpu.r2 = 0;
        cpu.op_div();
        assert_eq!(cpu.r1, 7);
    }

    #[test]
    fn div_truncates_toward_zero() {
        let mut cpu = Cpu::new();
        cpu.r1 = word::mask_signed(-7);
        cpu.r2 = word::mask_signed(2);
        cpu.op_div();
        assert_eq!(word::sign_extend(cpu.r1), -3);
    }

    #[test]
    fn round_adds_one_only_when_r2_sign_bit_set() {
        let mut cpu = Cpu::new();
        cpu.r1 = 10;
        cpu.r2 = 0;
        cpu.op_round();
        assert_eq!(cpu.r1, 10);

        cpu.r2 = word::SIGN_BIT;
        cpu.op_round();
        assert_eq!(cpu.r1, 11);
    }

    proptest! {
        #[test]
        fn add_is_associative_modulo_2_48(a: i64, b: i64, c: i64) {
            let a = word::mask_signed(a >> 16); // keep within 48-bit range
            let b = word::mask_signed(b >> 16);
            let c = word::mask_signed(c >> 16);

            let mut left = Cpu::new();
            left.r1 = a;
            left.r2 = b;
            left.op_add(); // (a+b)
            left.r2 = c;
            left.op_add(); // (a+b)+c

            let mut right = Cpu::new();
            right.r1 = b;
            right.r2 = c;
            right.op_add(); // (b+c)
            let bc = right.r1;
            right.r1 = a;
            right.r2 = bc;
            right.op_add(); // a+(b+c)

            prop_assert_eq!(left.r1, right.r1);
        }
    }
}
