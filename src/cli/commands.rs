//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! The `*_source` functions do the work against any writer so they can be tested without files.

use std::fs;
use std::io::{self, Write};

use nepl_syntax::diagnostics::{self, SyntaxError};
use nepl_syntax::lexer::Lexer;
use nepl_syntax::operators::{OperatorDecl, OperatorSymbol, OperatorTable};
use nepl_syntax::parser::Parser;
use thiserror::Error;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let not_available = |e: io::Error| {
        tracing::debug!(file = file_path, error = %e, "cannot read source");
        CliError::failure(format!("File \"{file_path}\" not available!"))
    };

    let metadata = fs::metadata(file_path).map_err(not_available)?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(not_available)
}

/// Failure from a `*_source` command: either the input was rejected or the output could not be written.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Convert a `*_source` failure into a CLI error, rendering syntax errors against the source.
fn report(file_path: &str, source: &str, error: SourceError) -> CliError {
    match error {
        SourceError::Syntax(e) => CliError::failure(diagnostics::format_error(file_path, source, &e).trim_end()),
        io @ SourceError::Io(_) => CliError::failure(io.to_string()),
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// Write `Found tokens:` and then one token per line until the lexer is exhausted.
///
/// Tokens are written as they are scanned, so a lexical error is reported after the tokens
/// preceding it.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), SourceError> {
    writeln!(out, "Found tokens:")?;
    let mut lexer = Lexer::new(source.chars());
    while !lexer.is_exhausted() {
        let token = lexer.next_token()?;
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Tokenize a file and print the tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    lex_source(&source, &mut stdout.lock()).map_err(|e| report(file_path, &source, e))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Trees
// ============================================================================

/// Write each statement's S-expression, one per line, then optionally the operator table.
pub fn parse_source(source: &str, show_operators: bool, out: &mut impl Write) -> Result<(), SourceError> {
    let mut parser = Parser::new(Lexer::new(source.chars()))?;
    while let Some(statement) = parser.next_statement()? {
        writeln!(out, "{statement}")?;
    }

    if show_operators {
        write_operators(parser.operators(), out)?;
    }
    Ok(())
}

/// Parse a file and print its statements.
pub fn parse_file(file_path: &str, show_operators: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    parse_source(&source, show_operators, &mut stdout.lock()).map_err(|e| report(file_path, &source, e))?;
    Ok(ExitCode::SUCCESS)
}

/// Dump the table as the directives that would recreate it.
fn write_operators(operators: &OperatorTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Operators:")?;
    for (symbol, decl) in operators.iter() {
        writeln!(out, "{}", directive_line(symbol, decl))?;
    }
    Ok(())
}

/// `$OPERATOR <function> [$UNARY] <precedence> <elements...>`
fn directive_line(symbol: &OperatorSymbol, decl: &OperatorDecl) -> String {
    let unary = if symbol.is_unary { "$UNARY " } else { "" };
    format!(
        "$OPERATOR {} {}{} {}",
        decl.function,
        unary,
        decl.precedence,
        symbol.elements.join(" ")
    )
}
