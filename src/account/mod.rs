//! HTTP client for the remote account service, owner of the wire contract
//! under `/v1/user`.

mod client;
mod error;
pub mod types;

pub use self::client::AccountClient;
pub use self::error::Error;
