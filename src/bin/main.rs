use clap::{error::ErrorKind, Parser};
use lox_scanner::{Error, Scanner};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

/// Print the tokens of a Lox script, or of each line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "lox", version)]
struct Cli {
    /// Script to scan. Starts a prompt when omitted.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the token dump.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EX_USAGE),
            };
        },
    };

    let result = match cli.script.as_deref() {
        Some(path) => run_file(path),
        None => run_prompt(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(EX_IOERR)
        },
    }
}

fn run_file(path: &Path) -> io::Result<ExitCode> {
    info!(path = %path.display(), "scanning file");
    let contents = std::fs::read_to_string(path)?;

    let mut lox = Lox::new(io::stdout().lock(), io::stderr().lock());
    lox.run(&contents)?;

    Ok(if lox.had_error { ExitCode::from(EX_DATAERR) } else { ExitCode::SUCCESS })
}

fn run_prompt() -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buffer = String::new();

    let mut lox = Lox::new(io::stdout(), io::stderr());

    loop {
        write!(lox.out, "> ")?;
        lox.out.flush()?;

        buffer.clear();

        let num_bytes = input.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        lox.run(buffer.trim_end_matches(&['\r', '\n'][..]))?;
        lox.had_error = false;
    }

    Ok(ExitCode::SUCCESS)
}

struct Lox<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
    had_error: bool,
}

impl <Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out, had_error: false }
    }

    fn run(&mut self, source: &str) -> io::Result<()> {
        let mut errors: Vec<Error> = Vec::new();
        let tokens = Scanner::new(source).scan_tokens(&mut errors);
        debug!(tokens = tokens.len(), errors = errors.len(), "scanned");

        for e in errors.iter() {
            writeln!(self.err_out, "{}", e)?;
        }
        self.had_error |= !errors.is_empty();

        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }

        Ok(())
    }
}
