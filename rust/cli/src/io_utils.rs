//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line from a buffered reader, trimming whitespace. Returns
/// `None` on EOF or read error, which callers treat as a quit request.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
