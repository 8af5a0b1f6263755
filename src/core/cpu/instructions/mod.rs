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

//! Instruction dispatch, organized by instruction family for maintainability.

use super::decode::Opcode;
use super::Cpu;
use crate::core::error::{EmulatorError, Result};
use crate::core::system::Peripherals;
use crate::core::word;

mod arithmetic;
mod branch;
mod call;
mod io;
mod load;
mod logical;
mod shift;

/// What the control unit's run loop should do after one instruction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halt,
}

impl Cpu {
    /// Decode `instruction` and dispatch it to the matching handler.
    pub fn execute_instruction(&mut self, instruction: u64, io: &mut Peripherals) -> Result<StepOutcome> {
        let (opcode, operand) = word::decode(instruction);
        let Ok(opcode) = Opcode::try_from(opcode) else {
            return Err(EmulatorError::UnknownOpcode { opcode, pc: self.pc() });
        };

        match opcode {
            Opcode::LoadR1 => self.op_load_r1(operand, io),
            Opcode::LoadR2 => self.op_load_r2(operand, io),
            Opcode::LoadR3 => self.op_load_r3(operand, io),
            Opcode::StoreR1 => self.op_store_r1(operand, io),
            Opcode::StoreR3 => self.op_store_r3(operand, io),
            Opcode::ClearR1 => self.op_clear_r1(),
            Opcode::ClearR2 => self.op_clear_r2(),
            Opcode::ClearR3 => self.op_clear_r3(),
            Opcode::Add => self.op_add(),
            Opcode::Neg => self.op_neg(),
            Opcode::Mult => self.op_mult(),
            Opcode::Div => self.op_div(),
            Opcode::Round => self.op_round(),
            Opcode::And => self.op_and(),
            Opcode::Or => self.op_or(),
            Opcode::Xor => self.op_xor(),
            Opcode::Shift => self.op_shift(operand),
            Opcode::Call => self.op_call(operand, io),
            Opcode::Ret => self.op_ret(),
            Opcode::WritePt => self.op_write_pt(io),
            Opcode::ReadCr => self.op_read_cr(io)?,
            Opcode::Skip => self.op_skip(),
            Opcode::SkipZ => self.op_skip_z(),
            Opcode::SkipNz => self.op_skip_nz(),
            Opcode::Txr => self.op_txr(operand),
            Opcode::Halt => {
                log::info!("HALT at pc={}", self.pc());
                return Ok(StepOutcome::Halt);
            }
        }

        Ok(StepOutcome::Continue)
    }
}
