use std::{env, path::PathBuf, process::ExitCode, time::Instant};

use toylex::{errors::errors::CliError, init_tracing, read_source, render_listing};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    match run(env::args().skip(1).collect()) {
        Ok(listing) => {
            print!("{}", listing);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(args: Vec<String>) -> Result<String, CliError> {
    let [file_path] = args.as_slice() else {
        return Err(CliError::Usage);
    };

    let start = Instant::now();
    let source = read_source(&PathBuf::from(file_path))?;
    info!(path = %file_path, bytes = source.len(), elapsed = ?start.elapsed(), "read source");

    let listing = render_listing(&source);
    info!(elapsed = ?start.elapsed(), "total");

    Ok(listing)
}
