// envelope-client/src/lib.rs
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod report;
pub mod request;
pub mod timestamp;

pub use client::Client;
pub use envelope::ResponseEnvelope;
pub use error::ApiError;
pub use http::{HttpTransport, ResponseParts, TransportConfig, TransportError};
pub use report::{DiagnosticSink, StderrSink};
pub use request::{Payload, Placement, RequestDescriptor, Verb};
pub use timestamp::TimestampError;

// Re-export the reqwest transport when the feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
