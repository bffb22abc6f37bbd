/// The first line of a request, split into its tokens.
///
/// The method is kept as sent; the server answers every request line the same
/// way and never dispatches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method, e.g. "GET"
    pub method: String,
    /// The request target, e.g. "/index.html"
    pub target: String,
    /// Protocol version, when the client sent one
    pub version: Option<String>,
}

/// A request read off a connection: the request line plus the raw header
/// lines that followed it, in arrival order.
#[derive(Debug, Clone)]
pub struct Request {
    pub line: RequestLine,
    pub header_lines: Vec<String>,
}

impl Request {
    pub fn new(line: RequestLine) -> Self {
        Self {
            line,
            header_lines: Vec::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.line.target
    }

    /// Looks up a header value by name, ignoring ASCII case.
    ///
    /// Lines without a colon are skipped.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_lines.iter().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }
}
