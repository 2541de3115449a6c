//! HTTP client for the travel-report backend
//!
//! - `config` - base URL, default headers and timeouts
//! - `request` - transport-agnostic request description
//! - `transport` - the seam that executes requests (gloo-net in the browser)
//! - `error` - validation / transport / normalized errors
//! - `client` - typed operations

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;
pub mod upload_file;

pub use client::{use_api_client, ApiClient};
pub use config::ClientConfig;
pub use error::{ApiError, ReportError, TransportError};
pub use request::{ApiRequest, FormPart, HttpMethod, RequestBody};
pub use transport::{BrowserTransport, Transport};
pub use upload_file::UploadFile;
