use serde_json::Value;
use std::io::{self, Read};

/// Whether stdin is an interactive terminal rather than a pipe.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Attempt to read a JSON document from stdin if data is being piped.
/// Returns None if stdin is a TTY or the pipe is empty.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if is_interactive() {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
