use tokio::fs::File;

use crate::http::mime;

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str =
    "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD><BODY>404 File Not Found</BODY></HTML>";

/// HTTP status codes the server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Where the response body comes from.
#[derive(Debug)]
pub enum Body {
    /// An open file, streamed in blocks
    File(File),
    /// A fixed document written in one go
    Literal(&'static str),
}

/// The single response produced for a request.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// A 200 response streaming `file`, typed by the extension of `path`.
    pub fn file(file: File, path: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: mime::content_type(path),
            body: Body::File(file),
        }
    }

    /// The 404 response: always `text/html` with [`NOT_FOUND_BODY`].
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Body::Literal(NOT_FOUND_BODY),
        }
    }
}
