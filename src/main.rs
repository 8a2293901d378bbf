use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::info;
use macaque::{
    RunOptions,
    error::{LoadError, MacaqueError},
    logging, run_script,
};

/// macaque runs simple line-oriented scripts made of `print`, `var` and `if`
/// statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    script: Option<PathBuf>,

    /// Runs the given source text instead of a script file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "script")]
    eval: Option<String>,

    /// Reports failing lines and keeps going instead of stopping at the first
    /// error.
    #[arg(short, long)]
    keep_going: bool,

    /// Logs more detail to stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("macaque: could not install logger: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(errors) => {
            for e in errors {
                eprintln!("macaque: {e}");
            }
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<(), Vec<MacaqueError>> {
    let source = load(args.script, args.eval).map_err(|e| vec![e.into()])?;
    let out = BufWriter::new(io::stdout().lock());
    let options = RunOptions { keep_going: args.keep_going };

    run_script(&source, out, options).map_err(|errors| {
                                          errors.into_iter().map(MacaqueError::from).collect()
                                      })
}

fn load(script: Option<PathBuf>, eval: Option<String>) -> Result<String, LoadError> {
    if let Some(source) = eval {
        return Ok(source);
    }

    let path = script.ok_or(LoadError::MissingProgramArgument)?;
    info!("loading {}", path.display());

    fs::read_to_string(&path).map_err(|source| LoadError::FileReadFailure { path, source })
}
