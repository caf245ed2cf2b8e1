use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};
use verse::{
    ast::printer::print_stmt, errors::errors::Error, format_diagnostic,
    interpreter::interpreter::Interpreter, lexer::lexer::tokenize, parser::parser::parse,
};

const EXIT_USAGE: u8 = 64;
const EXIT_SYNTAX: u8 = 65;
const EXIT_RUNTIME: u8 = 70;

/// Runs a Verse source file through the tree-walking interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the source file to run.
    file: PathBuf,

    /// Print every top-level statement after parsing.
    #[arg(long)]
    print_ast: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if !cli.file.is_file() {
        eprintln!("Failed to read '{}': not a file", cli.file.display());
        return ExitCode::from(EXIT_USAGE);
    }

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read '{}': {}", cli.file.display(), err);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let start = Instant::now();
    let (tokens, mut errors) = tokenize(&source);
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (statements, parse_errors) = parse(tokens);
    errors.extend(parse_errors);
    info!("Parsed in {:?}", parse_start.elapsed());

    if !errors.is_empty() {
        report(&errors, &source, &cli.file);
        return ExitCode::from(EXIT_SYNTAX);
    }

    if cli.print_ast {
        for stmt in &statements {
            println!("{}", print_stmt(stmt));
        }
    }

    let interpret_start = Instant::now();
    let result = Interpreter::new(&statements).interpret();
    info!("Interpreted in {:?}", interpret_start.elapsed());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Interpretation failed: {}", err);
            report(&[err], &source, &cli.file);
            ExitCode::from(EXIT_RUNTIME)
        }
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::new();

    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(match verbose {
                0 => LevelFilter::Error,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            });
        }
    }

    builder.init();
}

fn report(errors: &[Error], source: &str, file: &Path) {
    for err in errors {
        eprint!("{}", format_diagnostic(err, source, file));
        if !err.get_position().is_null() {
            eprintln!("{}", err);
        }
    }
}
