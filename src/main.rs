#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! e8tags -- Declaration tags for E8Script and OneScript sources.

use ignore::{DirEntry, WalkBuilder};
use log::{debug, info};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use termcolor::{StandardStream, WriteColor};

use e8tags::error::{Error, Result};
use e8tags::language::ParserDefinition;
use e8tags::options::Options;

fn run_file<W: WriteColor>(
    options: &Options,
    file: std::result::Result<DirEntry, ignore::Error>,
    out: &mut W,
) -> Result<()> {
    let file = file?;
    let path = file.path();
    if file.file_type().is_some_and(|t| t.is_dir()) {
        return Ok(());
    }
    // Files named on the command line are always scanned.
    if file.depth() > 0 && !ParserDefinition::e8script().handles(path) {
        debug!("Skipping {}", path.display());
        return Ok(());
    }
    let fp = File::open(path).map_err(|e| Error::io(path, e))?;
    e8tags::run(
        options,
        &path.to_string_lossy(),
        BufReader::new(fp),
        out,
    )?;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    let args: Vec<_> = env::args_os().collect();
    let options = Options::new(&args);
    info!("Using options: {:#?}", options);

    let stdout = StandardStream::stdout(options.color);
    let mut out = stdout.lock();
    let mut failed = false;

    // Inputs are scanned in command line order.
    for path in &options.paths {
        if path == "-" {
            if let Err(e) = e8tags::run(&options, "-", io::stdin().lock(), &mut out) {
                eprintln!("{}", e);
                failed = true;
            }
            continue;
        }
        for f in WalkBuilder::new(path).build() {
            if let Err(e) = run_file(&options, f, &mut out) {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
