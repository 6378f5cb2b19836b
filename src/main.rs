use anyhow::{bail, Context, Result};
use log::debug;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use algi_exercises::{
    checks,
    company::{read_companies, write_company, Company},
    config::CHECKS_PASSED_MESSAGE,
};

const USAGE: &str = "usage: algi [check | company [RECORDS.json]]";

/// Runs `write` against a buffered stdout.
///
/// A reader that goes away early (`algi company ... | head`) ends the output
/// without an error.
fn write_stdout(write: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    match write(&mut out).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed by reader, stopping output");
            Ok(())
        }
        result => result.context("Failed to write to stdout"),
    }
}

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "check".to_string());
    debug!("Running command: {}", command);

    match command.as_str() {
        "check" => {
            checks::run_all()?;
            write_stdout(|out| writeln!(out, "{}", CHECKS_PASSED_MESSAGE))?;
        }
        "company" => {
            // Print the handout's sample record unless a records file is given.
            let companies = match args.next() {
                Some(path) => read_companies(&PathBuf::from(path))?,
                None => vec![Company::sample()],
            };
            write_stdout(|out| {
                companies
                    .iter()
                    .try_for_each(|company| write_company(&mut *out, company))
            })?;
        }
        other => bail!("Unknown command: {}\n{}", other, USAGE),
    }

    Ok(())
}
