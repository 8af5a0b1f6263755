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

//! The instruction set's opcode table.
//!
//! Numeric assignments follow `spec.md` §6: `LOAD_R1 = 1`, subsequent mnemonics
//! take consecutive values in listing order, `HALT = 99`.

/// One opcode of the instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    LoadR1 = 1,
    LoadR2 = 2,
    LoadR3 = 3,
    StoreR1 = 4,
    StoreR3 = 5,
    ClearR1 = 6,
    ClearR2 = 7,
    ClearR3 = 8,
    Add = 9,
    Neg = 10,
    Mult = 11,
    Div = 12,
    Round = 13,
    And = 14,
    Or = 15,
    Xor = 16,
    Shift = 17,
    Call = 18,
    Ret = 19,
    WritePt = 20,
    ReadCr = 21,
    Skip = 22,
    SkipZ = 23,
    SkipNz = 24,
    Txr = 25,
    Halt = 99,
}

impl Opcode {
    /// All opcodes paired with their deck mnemonic, in `spec.md` §6 listing order.
    pub const MNEMONICS: &'static [(&'static str, Opcode)] = &[
        ("LOAD_R1", Opcode::LoadR1),
        ("LOAD_R2", Opcode::LoadR2),
        ("LOAD_R3", Opcode::LoadR3),
        ("STORE_R1", Opcode::StoreR1),
        ("STORE_R3", Opcode::StoreR3),
        ("CLEAR_R1", Opcode::ClearR1),
        ("CLEAR_R2", Opcode::ClearR2),
        ("CLEAR_R3", Opcode::ClearR3),
        ("ADD", Opcode::Add),
        ("NEG", Opcode::Neg),
        ("MULT", Opcode::Mult),
        ("DIV", Opcode::Div),
        ("ROUND", Opcode::Round),
        ("AND", Opcode::And),
        ("OR", Opcode::Or),
        ("XOR", Opcode::Xor),
        ("SHIFT", Opcode::Shift),
        ("CALL", Opcode::Call),
        ("RET", Opcode::Ret),
        ("WRITE_PT", Opcode::WritePt),
        ("READ_CR", Opcode::ReadCr),
        ("SKIP", Opcode::Skip),
        ("SKIP_Z", Opcode::SkipZ),
        ("SKIP_NZ", Opcode::SkipNz),
        ("TXR", Opcode::Txr),
        ("HALT", Opcode::Halt),
    ];

    /// Look up an opcode by its deck mnemonic (case-sensitive, as emitted by the
    /// assembler).
    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        Self::MNEMONICS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, op)| *op)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match value {
            1 => LoadR1,
            2 => LoadR2,
            3 => LoadR3,
            4 => StoreR1,
            5 => StoreR3,
            6 => ClearR1,
            7 => ClearR2,
            8 => ClearR3,
            9 => Add,
            10 => Neg,
            11 => Mult,
            12 => Div,
            13 => Round,
            14 => And,
            15 => Or,
            16 => Xor,
            17 => Shift,
            18 => Call,
            19 => Ret,
            20 => WritePt,
            21 => ReadCr,
            22 => Skip,
            23 => SkipZ,
            24 => SkipNz,
            25 => Txr,
            99 => Halt,
            _ => return Err(()),
        })
    }
}
