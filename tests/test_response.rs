use webserver::http::response::{Body, NOT_FOUND_BODY, Response, StatusCode};
use webserver::http::writer::{ResponseWriter, serialize_head};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_not_found_response() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.content_type, "text/html");
    assert!(matches!(response.body, Body::Literal(text) if text == NOT_FOUND_BODY));
}

#[test]
fn test_not_found_body_literal() {
    assert_eq!(
        NOT_FOUND_BODY,
        "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD><BODY>404 File Not Found</BODY></HTML>"
    );
}

#[test]
fn test_serialize_head_ok() {
    let head = serialize_head(StatusCode::Ok, "image/png");

    assert_eq!(
        head,
        b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_head_has_no_content_length() {
    let head = serialize_head(StatusCode::NotFound, "text/html");
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(!head.contains("Content-Length"));
    assert!(head.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_writer_sends_not_found_document() {
    let writer = ResponseWriter::new(Response::not_found());
    assert_eq!(writer.status(), StatusCode::NotFound);

    let mut out: Vec<u8> = Vec::new();
    let sent = writer.write_to_stream(&mut out).await.unwrap();

    let expected = format!(
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/html\r\n\r\n{}",
        NOT_FOUND_BODY
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(sent, NOT_FOUND_BODY.len() as u64);
}

#[tokio::test]
async fn test_writer_streams_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, b"<h1>Hi</h1>").unwrap();

    let file = tokio::fs::File::open(&path).await.unwrap();
    let response = Response::file(file, &path.to_string_lossy());
    assert_eq!(response.content_type, "text/html");

    let mut out: Vec<u8> = Vec::new();
    let sent = ResponseWriter::new(response)
        .write_to_stream(&mut out)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<h1>Hi</h1>".to_vec()
    );
    assert_eq!(sent, 11);
}
