//! Client for the AWS Elemental MediaLive REST API.
//!
//! The client owns the operation table and the REST-JSON marshalling. Sending
//! bytes is delegated to a [`Transport`], so signing and connection handling
//! live outside this crate.
//!
//! ```no_run
//! use medialive_client::{ClientConfig, MediaLiveClient, Transport};
//! use medialive_models::operations::DescribeChannelRequest;
//!
//! async fn channel_name<T: Transport>(transport: T) -> anyhow::Result<Option<String>> {
//!     let client = MediaLiveClient::new(ClientConfig::for_region("us-west-2")?, transport);
//!     let channel = client
//!         .describe_channel(DescribeChannelRequest::for_channel("8675309"))
//!         .await?;
//!     Ok(channel.name)
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod operations;
pub mod transport;

pub use client::MediaLiveClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ServiceError, ServiceErrorKind};
pub use http::{HttpRequest, HttpResponse, Method};
pub use operation::Operation;
pub use transport::{Transport, TransportError};
