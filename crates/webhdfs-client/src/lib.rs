//! # WebHDFS Client
//!
//! A small client for the WebHDFS REST API.
//!
//! ## Features
//!
//! - **Redirect hand-off**: `CREATE` is sent to the NameNode and re-sent to the
//!   DataNode named in the `307` redirect
//! - **Pass-through**: gateway bodies are returned verbatim, never parsed
//! - **Bounded calls**: every outbound request carries a timeout
//!
//! ## Example
//!
//! ```rust,ignore
//! use webhdfs_client::{ClientConfig, WebHdfsClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WebHdfsClient::new(
//!         ClientConfig::new("http://namenode:9870/webhdfs/v1").with_user("hadoop"),
//!     )?;
//!
//!     client.create("/01/hello.txt", "Hello, World!").await?;
//!     let listing = client.list("/01").await?;
//!     println!("{}", listing.body);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::WebHdfsClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::*;
