use std::io::{self, Read};

use tracing::{debug, info, warn};

use crate::config::EndpointConfig;
use crate::consts::STREAM_READ_BUFFER_BYTES;
use crate::error::{LecternError, Result};

use super::decoder::Utf8StreamDecoder;
use super::state::{ExchangeEvent, ExchangeTicket, ExchangeUpdate, MessageRequest};

/// Response body as a plain byte stream.
pub type ResponseBody = Box<dyn Read + Send>;

/// Sends a message request and hands back the streamed response body.
pub trait ExchangeTransport: Send + Sync {
    fn open(&self, request: &MessageRequest) -> Result<ResponseBody>;
}

/// Blocking HTTP transport for the remote message endpoint.
pub struct HttpTransport {
    agent: ureq::Agent,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &EndpointConfig) -> Self {
        let idle = config.idle_timeout();
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(idle)
            .timeout_read(idle)
            .build();
        Self {
            agent,
            url: config.url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ExchangeTransport for HttpTransport {
    fn open(&self, request: &MessageRequest) -> Result<ResponseBody> {
        let body =
            serde_json::to_string(request).map_err(|e| LecternError::Request(e.to_string()))?;

        let response = match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) => response,
            // The body of an error status is streamed like any other.
            Err(ureq::Error::Status(code, response)) => {
                warn!(code, url = %self.url, "Endpoint returned an error status");
                response
            }
            Err(ureq::Error::Transport(t)) => return Err(LecternError::Request(t.to_string())),
        };

        if matches!(response.status(), 204 | 205 | 304) {
            return Err(LecternError::EmptyBody);
        }
        Ok(Box::new(response.into_reader()))
    }
}

/// Run one exchange to the end, reporting every step to `sink`.
///
/// Each decoded chunk is reported as soon as it is read. On failure the sink
/// receives [`ExchangeUpdate::Failed`] and the error is also returned.
pub fn run_exchange<F>(
    transport: &dyn ExchangeTransport,
    ticket: &ExchangeTicket,
    mut sink: F,
) -> Result<()>
where
    F: FnMut(ExchangeEvent),
{
    let mut emit = |update: ExchangeUpdate| {
        sink(ExchangeEvent {
            kind: ticket.kind,
            generation: ticket.generation,
            update,
        })
    };

    info!(kind = %ticket.kind, generation = ticket.generation, "Sending request");
    let mut body = match transport.open(&ticket.request) {
        Ok(body) => body,
        Err(e) => {
            warn!(kind = %ticket.kind, error = %e, "Request failed");
            emit(ExchangeUpdate::Failed(e.to_string()));
            return Err(e);
        }
    };
    emit(ExchangeUpdate::Streaming);

    let mut decoder = Utf8StreamDecoder::new();
    let mut buf = vec![0u8; STREAM_READ_BUFFER_BYTES];
    let mut received = 0usize;
    loop {
        match body.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                received += n;
                debug!(kind = %ticket.kind, bytes = n, "Chunk received");
                let text = decoder.decode(&buf[..n]);
                if !text.is_empty() {
                    emit(ExchangeUpdate::Chunk(text));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(kind = %ticket.kind, error = %e, "Stream broke off");
                emit(ExchangeUpdate::Failed(e.to_string()));
                return Err(e.into());
            }
        }
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        emit(ExchangeUpdate::Chunk(tail));
    }
    info!(kind = %ticket.kind, bytes = received, "Exchange complete");
    emit(ExchangeUpdate::Completed);
    Ok(())
}
