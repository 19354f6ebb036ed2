// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;
use helpers::telemetry::setup_simple_tracing;

mod arithmetic;
mod cli;
mod demo;
mod eval;
pub mod helpers;
mod root;
mod save;
mod show;

pub fn main() {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level());

    if let Err(err) = cli.execute() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
