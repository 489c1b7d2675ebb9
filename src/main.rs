//! The krait compiler CLI.
//!
//! This binary reads a krait source file (or stdin), runs the compilation
//! pipeline up to the requested stage, and writes the stage's textual
//! result (tokens, AST, or LLVM IR) to the output path or stdout.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

mod diagnostics;
mod driver;

use driver::Emit;

/// Command-line interface for the krait compiler.
#[derive(Parser)]
#[command(name = "krait")]
#[command(version)]
#[command(about = "The krait language compiler", long_about = None)]
struct Cli {
    /// The source file to compile, or `-` to read from standard input.
    file: String,

    /// Output path. If not specified, writes to standard output.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// The stage to stop after: the token stream, the AST, or LLVM IR.
    #[arg(long, value_enum, default_value_t = Emit::Ir)]
    emit: Emit,
}

/// Entry point for the krait compiler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let (filename, source) = match read_source(&cli.file) {
        Ok(pair) => pair,
        Err(error) => {
            eprintln!("Error: failed to read '{}': {}", cli.file, error);
            return ExitCode::FAILURE;
        }
    };

    let module_name = module_name_for(&filename);

    let result = match driver::compile(&source, &module_name, cli.emit) {
        Ok(result) => result,
        Err(error) => {
            diagnostics::report_error(&filename, &source, &error);
            return ExitCode::FAILURE;
        }
    };

    match write_output(cli.output.as_deref(), &result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: failed to write output: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Reads the source text, treating `-` as standard input.
///
/// Returns the display filename alongside the content.
fn read_source(file: &str) -> std::io::Result<(String, String)> {
    if file == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(("<stdin>".to_string(), source))
    } else {
        let source = std::fs::read_to_string(file)?;
        Ok((file.to_string(), source))
    }
}

/// Derives the LLVM module name from the source filename.
fn module_name_for(filename: &str) -> String {
    if filename == "<stdin>" {
        return "stdin".to_string();
    }
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("module")
        .to_string()
}

/// Writes the result to the output path, or stdout when none was given.
fn write_output(output: Option<&Path>, result: &str) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, result),
        None => {
            print!("{result}");
            Ok(())
        }
    }
}
