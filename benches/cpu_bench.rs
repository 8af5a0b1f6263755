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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use punchvm::core::cpu::decode::Opcode;
use punchvm::core::cpu::Cpu;
use punchvm::core::system::{PeripheralPaths, Peripherals};
use punchvm::core::word;

fn peripherals() -> (tempfile::TempDir, Peripherals) {
    let dir = tempfile::tempdir().unwrap();
    let paths = PeripheralPaths {
        scratchpad: dir.path().join("scratchpad.bin"),
        library: None,
        deck: {
            let p = dir.path().join("deck.txt");
            std::fs::write(&p, "").unwrap();
            p
        },
        output: dir.path().join("output.txt"),
    };
    let io = Peripherals::open(&paths).unwrap();
    (dir, io)
}

fn word_algebra_benchmark(c: &mut Criterion) {
    c.bench_function("word_sign_extend", |b| {
        b.iter(|| black_box(word::sign_extend(black_box(word::WORD_MASK))));
    });

    c.bench_function("word_decode", |b| {
        let inst = word::encode(25, 0x1234);
        b.iter(|| black_box(word::decode(black_box(inst))));
    });
}

fn instruction_dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_execute_instruction");
    let (_dir, mut io) = peripherals();

    group.bench_function("add", |b| {
        let mut cpu = Cpu::new();
        cpu.r1 = 41;
        cpu.r2 = 1;
        let inst = word::encode(Opcode::Add as u8, 0);
        b.iter(|| {
            black_box(cpu.execute_instruction(inst, &mut io).unwrap());
        });
    });

    group.bench_function("mult", |b| {
        let mut cpu = Cpu::new();
        cpu.r2 = word::mask_signed(-12345);
        cpu.r3 = word::mask_signed(6789);
        let inst = word::encode(Opcode::Mult as u8, 0);
        b.iter(|| {
            black_box(cpu.execute_instruction(inst, &mut io).unwrap());
        });
    });

    group.bench_function("load_r1", |b| {
        let mut cpu = Cpu::new();
        let inst = word::encode(Opcode::LoadR1 as u8, 5);
        b.iter(|| {
            black_box(cpu.execute_instruction(inst, &mut io).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, word_algebra_benchmark, instruction_dispatch_benchmark);
criterion_main!(benches);
