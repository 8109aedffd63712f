//! Stdin helpers for the interactive `play` loop.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use liardice_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("bid 3 5\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("bid 3 5"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Writes `prompt` without a newline, flushes, then reads the answer.
pub fn prompt_line(
    prompt: &str,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}
