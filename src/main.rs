#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use redadeg::{cli, dispatch, utils};

#[macro_use]
extern crate redadeg;

/// Demo sensor packets, as (activity code, raw argument list).
const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    // A bad packet aborts the whole batch; there is no per-entry recovery.
    for (code, data) in PACKAGES {
        let workout = dispatch::read_package(code, data)?;
        dlog!("dispatched code={code} label={}", workout.label());

        println!("{}", workout.summary());
    }

    Ok(())
}
