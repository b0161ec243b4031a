//! The `cero` compiler entry point.

use std::process::ExitCode;

use anyhow::{bail, Result};
use cero_drv::{build_file, Config, ConsoleReporter};

fn main() -> ExitCode {
    match run() {
        Ok(succeeded) => {
            if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let mut config = Config::default();
    let mut path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--warnings-as-errors" => config.warnings_as_errors = true,
            "--tab-size" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--tab-size needs a value"))?;
                config.tab_size = value.parse()?;
            }
            _ if arg.starts_with('-') => bail!("unknown option `{arg}`"),
            _ => {
                if path.replace(arg).is_some() {
                    bail!("expected exactly one source path");
                }
            }
        }
    }

    let Some(path) = path else {
        bail!("usage: cero [--warnings-as-errors] [--tab-size N] <file>");
    };

    let mut reporter = ConsoleReporter::new();
    Ok(build_file(&path, &config, &mut reporter))
}
