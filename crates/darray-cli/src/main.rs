// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use darray_cli::correct::{CorrectionPolynomial, run_filter};
use darray_cli::fit::fit_polynomial;
use darray_cli::points::load_points;
use darray_cli::report::write_report;
use darray_cli::status::{Status, UnknownCommand};

fn cli() -> Command {
    Command::new("darray")
        .version(clap::crate_version!())
        .about("Least-squares polynomial fitting and sensor correction")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fit")
                .about("Fit a polynomial to a two-column points file")
                .arg(
                    Arg::new("order")
                        .short('o')
                        .long("order")
                        .required(true)
                        .value_parser(clap::value_parser!(u32).range(1..))
                        .help("Order of the polynomial. Must be 1 or more"),
                )
                .arg(
                    Arg::new("points")
                        .short('p')
                        .long("points")
                        .visible_alias("point")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath)
                        .help("Points to evaluate, two whitespace-separated columns per line"),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .visible_alias("verb")
                        .action(ArgAction::SetTrue)
                        .help("Print the intermediate matrices and raw coefficients"),
                ),
        )
        .subcommand(
            Command::new("correct")
                .about("Correct 'ideal real' sensor readings from stdin to stdout"),
        )
}

fn run_fit(matches: &ArgMatches) -> Result<()> {
    let order = *matches
        .get_one::<u32>("order")
        .context("missing --order")?;
    let path = matches
        .get_one::<PathBuf>("points")
        .context("missing --points")?;
    let verbose = matches.get_flag("verbose");

    let mut points = load_points(path)?;

    let fit = fit_polynomial(&points, order as usize)
        .with_context(|| format!("failed to fit order {order} to '{}'", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &fit, verbose)?;
    out.flush()?;

    points.destroy();

    Ok(())
}

fn run_correct() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let pairs = run_filter(stdin.lock(), &mut out, &CorrectionPolynomial::default())?;
    out.flush()?;

    log::info!("corrected {} readings", pairs);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DARRAY_LOG", "error,darray=info"))
        .init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                Status::SyntaxError.into()
            } else {
                Status::Success.into()
            };
        }
    };

    let result = match matches.subcommand() {
        Some(("fit", sub)) => run_fit(sub),
        Some(("correct", _)) => run_correct(),
        other => {
            let name = other.map(|(name, _)| name).unwrap_or_default();
            Err(UnknownCommand(name.to_string()).into())
        }
    };

    match result {
        Ok(()) => Status::Success.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            Status::classify(&err).into()
        }
    }
}
