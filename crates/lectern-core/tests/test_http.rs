use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use lectern_core::config::EndpointConfig;
use lectern_core::error::LecternError;
use lectern_core::exchange::{
    run_exchange, ExchangeKind, ExchangePhase, ExchangeState, HttpTransport,
};

/// Read one HTTP request and return its body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    String::from_utf8(body).unwrap()
}

/// Serve exactly one request on a random port with `status` and a chunked
/// body made of `chunks`. The received request body is sent back on the channel.
fn serve_once(status: &'static str, chunks: &'static [&'static [u8]]) -> (String, mpsc::Receiver<String>) {
    serve_paced(status, chunks, Duration::ZERO)
}

/// Like [`serve_once`], sleeping `gap` before each chunk.
fn serve_paced(
    status: &'static str,
    chunks: &'static [&'static [u8]],
    gap: Duration,
) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/message", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let body = read_request(&mut stream);
        tx.send(body).unwrap();

        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\n\
             Transfer-Encoding: chunked\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        for chunk in chunks {
            thread::sleep(gap);
            write!(stream, "{:x}\r\n", chunk.len()).unwrap();
            stream.write_all(chunk).unwrap();
            stream.write_all(b"\r\n").unwrap();
            stream.flush().unwrap();
        }
        stream.write_all(b"0\r\n\r\n").unwrap();
        stream.flush().unwrap();
    });
    (url, rx)
}

fn transport_for(url: String) -> HttpTransport {
    transport_with_idle(url, 10)
}

fn transport_with_idle(url: String, idle_timeout_secs: u64) -> HttpTransport {
    HttpTransport::new(&EndpointConfig {
        url,
        idle_timeout_secs,
    })
}

#[test]
fn test_streams_chunked_response() {
    let (url, requests) = serve_once("200 OK", &[b"Hel", b"lo \xE4\xB8", b"\x96\xE7\x95\x8C"]);
    let transport = transport_for(url);

    let mut state = ExchangeState::new(ExchangeKind::Translate);
    let ticket = state.trigger("Hallo Welt").unwrap();
    let mut events = Vec::new();
    run_exchange(&transport, &ticket, |e| events.push(e)).unwrap();
    for event in &events {
        state.apply(event);
    }

    assert_eq!(state.result(), "Hello 世界");
    assert_eq!(state.phase(), ExchangePhase::Completed);

    let body: serde_json::Value = serde_json::from_str(&requests.recv().unwrap()).unwrap();
    assert_eq!(body["text"], "Hallo Welt");
    assert_eq!(body["label"], "translate");
}

#[test]
fn test_slow_stream_outlives_idle_timeout() {
    // Total stream time is about 2.1 s against a 1 s idle limit.
    let (url, _requests) = serve_paced(
        "200 OK",
        &[b"part1 ", b"part2 ", b"part3"],
        Duration::from_millis(700),
    );
    let transport = transport_with_idle(url, 1);

    let mut state = ExchangeState::new(ExchangeKind::Analyze);
    let ticket = state.trigger("a long question").unwrap();
    let mut events = Vec::new();
    let outcome = run_exchange(&transport, &ticket, |e| events.push(e));
    for event in &events {
        state.apply(event);
    }

    assert!(outcome.is_ok(), "{outcome:?}");
    assert_eq!(state.phase(), ExchangePhase::Completed);
    assert_eq!(state.result(), "part1 part2 part3");
}

#[test]
fn test_error_status_body_is_still_streamed() {
    let (url, _requests) = serve_once("500 Internal Server Error", &[b"backend exploded"]);
    let transport = transport_for(url);

    let mut state = ExchangeState::new(ExchangeKind::Analyze);
    let ticket = state.trigger("text").unwrap();
    let mut events = Vec::new();
    run_exchange(&transport, &ticket, |e| events.push(e)).unwrap();
    for event in &events {
        state.apply(event);
    }
    assert_eq!(state.result(), "backend exploded");
}

#[test]
fn test_connection_refused_is_request_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let transport = transport_for(format!("http://127.0.0.1:{port}/api/message"));

    let mut state = ExchangeState::new(ExchangeKind::Translate);
    let ticket = state.trigger("text").unwrap();
    let mut events = Vec::new();
    let outcome = run_exchange(&transport, &ticket, |e| events.push(e));

    assert!(matches!(outcome, Err(LecternError::Request(_))));
    for event in &events {
        state.apply(event);
    }
    assert_eq!(state.phase(), ExchangePhase::Failed);
}
