use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use coeus::{render_error, DEFAULT_SCANNER};
use log::info;
use thiserror::Error;

/// A line consisting of only this ends interactive input.
const END_COMMAND: &str = ":end";

#[derive(Error, Debug)]
enum CliError {
    #[error("usage: coeus [FILE]")]
    Usage,
    #[error("failed to read {path:?}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Prints every token, then every lexical error. Returns whether the source was clean.
fn run() -> Result<bool, CliError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (source, file_name) = match args.as_slice() {
        [] => (read_interactive()?, String::from("<stdin>")),
        [file_path] => {
            let path = PathBuf::from(file_path);
            let source = read_to_string(&path).map_err(|source| CliError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_path.clone());

            (source, file_name)
        }
        _ => return Err(CliError::Usage),
    };

    let start = Instant::now();
    let (tokens, errors) = DEFAULT_SCANNER.scan_with_diagnostics(&source);
    info!("Tokenized in {:?}", start.elapsed());

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{}", token)?;
    }
    stdout.flush()?;

    for error in &errors {
        eprintln!("{}\n", render_error(error, &source, &file_name));
    }

    Ok(errors.is_empty())
}

fn read_interactive() -> Result<String, CliError> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        println!(
            "Enter Coeus code (end input with Ctrl+D, Ctrl+Z on Windows, or a line containing only {}):",
            END_COMMAND
        );
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim_end() == END_COMMAND {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
