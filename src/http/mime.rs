/// Content type used for anything without a known extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    (".htm", "text/html"),
    (".html", "text/html"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".json", "application/json"),
];

/// Maps a file name or path to the content type sent for it.
///
/// Matching is on the trailing extension and ignores ASCII case, so
/// `/IMAGE.PNG` is `image/png`.
///
/// ```
/// # use webserver::http::mime::content_type;
/// assert_eq!(content_type("./index.html"), "text/html");
/// assert_eq!(content_type("./archive.tar.gz"), "application/octet-stream");
/// ```
pub fn content_type(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();

    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
        .map(|(_, ty)| *ty)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
