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

//! CLI entry point for the simulator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use punchvm::core::system::{PeripheralPaths, System};

/// Simulate a small fixed-point, tape-oriented stored-program computer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Writable scratchpad tape (created if absent).
    #[arg(long, default_value = "scratchpad.bin")]
    scratchpad: PathBuf,

    /// Read-only library tape. CALL is a no-op if omitted.
    #[arg(long)]
    library: Option<PathBuf>,

    /// Input deck (card reader source).
    #[arg(long, default_value = "deck.txt")]
    deck: PathBuf,

    /// Output paper tape.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to load .env: {e}");
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let paths = PeripheralPaths {
        scratchpad: args.scratchpad,
        library: args.library,
        deck: args.deck,
        output: args.output,
    };

    match run(&paths) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(paths: &PeripheralPaths) -> punchvm::core::error::Result<i32> {
    let mut system = System::open(paths)?;
    system.run()
}
