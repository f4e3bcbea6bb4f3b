//! Process-level CLI tests: flag validation, exit codes, and output bytes.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;

use assert_cmd::Command;

fn pagecheck() -> Command {
    Command::cargo_bin("pagecheck").expect("binary builds")
}

fn write_fixture(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

const PAGE: &[u8] = b"<html><head><title>x</title></head><body><h1>y</h1></body></html>";

#[test]
fn file_and_url_are_mutually_exclusive() {
    pagecheck()
        .args(["-f", "index.html", "-u", "http://example.com"])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn one_source_is_required() {
    pagecheck().assert().failure().code(1).stdout("");
}

#[test]
fn missing_checks_file_exits_before_document_read() {
    let dir = tempfile::tempdir().unwrap();
    let html = write_fixture(dir.path(), "index.html", PAGE);

    pagecheck()
        .args(["-f", &html, "-c", "no-such-checks.json"])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn missing_html_file_exits() {
    let dir = tempfile::tempdir().unwrap();
    let checks = write_fixture(dir.path(), "checks.json", br#"["h1"]"#);

    pagecheck()
        .args(["-f", "no-such-file.html", "-c", &checks])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn checks_file_against_local_document() {
    let dir = tempfile::tempdir().unwrap();
    let html = write_fixture(dir.path(), "index.html", PAGE);
    let checks = write_fixture(dir.path(), "checks.json", br#"["title", "h1", "h2"]"#);

    pagecheck()
        .args(["-f", &html, "-c", &checks])
        .assert()
        .success()
        .stdout("{\n    \"h1\": true,\n    \"h2\": false,\n    \"title\": true\n}\n");
}

#[test]
fn empty_checks_produce_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let html = write_fixture(dir.path(), "index.html", PAGE);
    let checks = write_fixture(dir.path(), "checks.json", b"[]");

    pagecheck()
        .args(["-f", &html, "-c", &checks])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn malformed_selector_fails_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let html = write_fixture(dir.path(), "index.html", PAGE);
    let checks = write_fixture(dir.path(), "checks.json", br#"["h1["]"#);

    pagecheck()
        .args(["-f", &html, "-c", &checks])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn refused_connection_exits_with_diagnostic() {
    // Bind to an ephemeral port, then drop the listener so the port refuses.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = tempfile::tempdir().unwrap();
    let checks = write_fixture(dir.path(), "checks.json", br#"["h1"]"#);

    let assert = pagecheck()
        .args(["-u", &format!("http://127.0.0.1:{port}/"), "-c", &checks])
        .assert()
        .failure()
        .code(1)
        .stdout("");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(!stderr.is_empty(), "expected a diagnostic on stderr");
}

#[test]
fn url_source_end_to_end() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).unwrap();

        let body = PAGE;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let checks = write_fixture(dir.path(), "checks.json", br#"["h1", "h2"]"#);

    pagecheck()
        .args(["-u", &format!("http://127.0.0.1:{port}/"), "-c", &checks])
        .assert()
        .success()
        .stdout("{\n    \"h1\": true,\n    \"h2\": false\n}\n");

    server.join().unwrap();
}

#[test]
fn http_error_status_is_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).unwrap();
        stream
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let checks = write_fixture(dir.path(), "checks.json", br#"["h1"]"#);

    pagecheck()
        .args(["-u", &format!("http://127.0.0.1:{port}/"), "-c", &checks])
        .assert()
        .failure()
        .code(1)
        .stdout("");

    server.join().unwrap();
}
