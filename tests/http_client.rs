// tests/http_client.rs
//
// HttpClassifier against a one-shot local server.
//
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use soccer_factcheck::api::{AnalyzeError, Classifier, HttpClassifier, Prediction};
use soccer_factcheck::config::ApiOptions;
use soccer_factcheck::form::{FormController, FormStatus};

/// Read one HTTP request (headers + Content-Length body).
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve `response` to the first connection after `delay`; the handle yields
/// the raw request that was received.
fn serve_once(response: String, delay: Duration) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        thread::sleep(delay);
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
        request
    });
    (format!("http://{addr}"), handle)
}

fn reply(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn classifier(base: &str, timeout: Duration) -> HttpClassifier {
    let mut opts = ApiOptions::with_endpoint(&format!("{base}/api/predict")).unwrap();
    opts.timeout = timeout;
    HttpClassifier::new(opts)
}

fn body_of(request: &str) -> serde_json::Value {
    let body = request.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("");
    serde_json::from_str(body).unwrap()
}

#[test]
fn posts_json_and_decodes_verdict() {
    let (base, server) = serve_once(
        reply(
            "200 OK",
            r#"{"success":true,"prediction":"Real","confidence":0.87,"probabilities":{"real":0.87,"fake":0.13}}"#,
        ),
        Duration::ZERO,
    );

    let result = classifier(&base, Duration::from_secs(5))
        .analyze("Messi signs new contract")
        .unwrap();
    assert_eq!(result.prediction, Prediction::Real);
    assert_eq!(result.confidence, 0.87);
    assert_eq!(result.probabilities.real, 0.87);
    assert_eq!(result.probabilities.fake, 0.13);

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /api/predict HTTP/1.1\r\n"), "{request}");
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert_eq!(body_of(&request), serde_json::json!({ "text": "Messi signs new contract" }));
}

#[test]
fn error_field_on_non_2xx_is_server_error() {
    let (base, server) = serve_once(reply("400 Bad Request", r#"{"error":"text too short"}"#), Duration::ZERO);

    let err = classifier(&base, Duration::from_secs(5)).analyze("Hi").unwrap_err();
    assert_eq!(err, AnalyzeError::Server { status: 400, message: "text too short".into() });
    assert_eq!(err.user_message(), "text too short");
    server.join().unwrap();
}

#[test]
fn whitespace_error_field_is_shown_as_sent() {
    let (base, server) = serve_once(reply("400 Bad Request", r#"{"error":"   "}"#), Duration::ZERO);

    let err = classifier(&base, Duration::from_secs(5)).analyze("Hi").unwrap_err();
    assert_eq!(err, AnalyzeError::Server { status: 400, message: "   ".into() });
    assert_eq!(err.user_message(), "   ");
    server.join().unwrap();
}

#[test]
fn non_2xx_without_error_field_is_generic() {
    let (base, server) = serve_once(reply("500 Internal Server Error", "oops"), Duration::ZERO);

    let err = classifier(&base, Duration::from_secs(5)).analyze("Hi").unwrap_err();
    assert_eq!(err, AnalyzeError::Status { status: 500 });
    assert_eq!(err.user_message(), "Failed to analyze news. Please try again.");
    server.join().unwrap();
}

#[test]
fn malformed_success_body_is_generic() {
    let (base, server) = serve_once(reply("200 OK", r#"{"prediction":"Maybe"}"#), Duration::ZERO);

    let err = classifier(&base, Duration::from_secs(5)).analyze("Hi").unwrap_err();
    assert!(matches!(err, AnalyzeError::Decode(_)), "{err:?}");
    assert_eq!(err.user_message(), "Failed to analyze news. Please try again.");
    server.join().unwrap();
}

#[test]
fn stalled_service_times_out() {
    let (base, _server) = serve_once(reply("200 OK", "{}"), Duration::from_secs(3));

    let err = classifier(&base, Duration::from_millis(300)).analyze("Hi").unwrap_err();
    assert_eq!(err, AnalyzeError::Timeout);
    assert_eq!(err.user_message(), "Request timeout. Please try again.");
}

#[test]
fn refused_connection_is_generic() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = classifier(&format!("http://{addr}"), Duration::from_secs(5))
        .analyze("Hi")
        .unwrap_err();
    assert!(matches!(err, AnalyzeError::Transport(_)), "{err:?}");
    assert_eq!(err.user_message(), "Failed to analyze news. Please try again.");
}

#[test]
fn form_over_http_reports_timeout_and_stops_loading() {
    let (base, _server) = serve_once(reply("200 OK", "{}"), Duration::from_secs(3));
    let mut form = FormController::new(std::sync::Arc::new(classifier(&base, Duration::from_millis(300))));

    form.set_text("  Some news  ");
    form.submit();
    assert!(form.is_loading());
    assert_eq!(form.wait(), FormStatus::Failed);
    assert_eq!(form.error(), Some("Request timeout. Please try again."));
    assert!(!form.is_loading());
    assert!(form.result().is_none());
}

#[test]
fn health_check_hits_sibling_endpoint() {
    let (base, server) = serve_once(
        reply("200 OK", r#"{"status":"healthy","model_loaded":true}"#),
        Duration::ZERO,
    );

    let health = classifier(&base, Duration::from_secs(5)).health().unwrap();
    assert!(health.is_healthy());

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /api/health HTTP/1.1\r\n"), "{request}");
}
