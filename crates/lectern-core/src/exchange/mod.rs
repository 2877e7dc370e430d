pub mod client;
pub mod decoder;
mod state;

pub use client::{run_exchange, ExchangeTransport, HttpTransport, ResponseBody};
pub use decoder::Utf8StreamDecoder;
pub use state::{
    ExchangeEvent, ExchangeKind, ExchangePhase, ExchangeState, ExchangeTicket, ExchangeUpdate,
    MessageRequest,
};
