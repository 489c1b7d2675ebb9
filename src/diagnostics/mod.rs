//! Error reporting for the krait CLI.
//!
//! Renders stage errors as labeled source-range reports on stderr using
//! `ariadne`, falling back to plain messages when no span is available or
//! the report itself cannot be produced.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_spanned(
    filename: &str,
    source: &str,
    range: Range<usize>,
    short_message: &str,
    message: &str,
) {
    if let Err(report_err) = print_range_report(filename, source, range, short_message, message) {
        eprintln!("Error in {}: {}", filename, message);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a compilation error on stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::Lex { message, span } => {
            report_spanned(filename, source, span.start..span.end, "Lexing failed", message);
        }
        CompileError::Parse(e) => {
            let span = e.span();
            report_spanned(
                filename,
                source,
                span.start..span.end,
                e.short_message(),
                e.message(),
            );
        }
        CompileError::Codegen(e) => match e.span() {
            Some(span) => {
                report_spanned(
                    filename,
                    source,
                    span.start..span.end,
                    e.short_message(),
                    e.message(),
                );
            }
            None => eprintln!("Error in {}: {}", filename, e.message()),
        },
    }
}
