//! # WebHDFS Relay
//!
//! HTTP relay exposing `upload`, `delete` and `list` on top of a WebHDFS
//! gateway.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HTTP Clients                      │
//! └─────────────────────────┬───────────────────────────┘
//!                           │
//! ┌─────────────────────────▼───────────────────────────┐
//! │                   WebHDFS Relay                     │
//! ├─────────────────────────────────────────────────────┤
//! │  Request ID │ Access log │ CORS │ Body limit        │
//! ├─────────────────────────────────────────────────────┤
//! │  Handlers: POST /upload, DELETE /delete, GET /list  │
//! ├─────────────────────────────────────────────────────┤
//! │  RequestTranslator (upload root prefixing)          │
//! ├─────────────────────────────────────────────────────┤
//! │                  webhdfs-client                     │
//! │        (CREATE redirect hand-off, DELETE,           │
//! │         LISTSTATUS)                                 │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod translator;

pub use config::RelayConfig;
pub use error::{ApiError, FileOperation};
pub use response::ResponseEnvelope;
pub use routes::create_router;
pub use server::{run_server, run_server_with_shutdown};
pub use state::AppState;
pub use translator::{FileOperationRequest, RequestTranslator};
