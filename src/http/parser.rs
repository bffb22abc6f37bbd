use crate::http::request::RequestLine;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two whitespace separated tokens
    MalformedRequestLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedRequestLine => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits a request line into method, target and optional version.
///
/// Any run of whitespace separates tokens; tokens past the third are ignored.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let target = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let version = parts.next();

    Ok(RequestLine {
        method: method.to_string(),
        target: target.to_string(),
        version: version.map(str::to_string),
    })
}

/// Strips the line terminator left by a `read_until(b'\n')`.
///
/// Handles CRLF and bare LF endings.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
