pub mod client;
pub mod error;
pub mod models;
pub mod resellerclub;

pub use client::DnsApiClient;
#[cfg(test)]
pub use client::MockDnsApiClient;
pub use error::ApiError;
pub use models::{Address, ApiReply, RecordKind};
pub use resellerclub::{ResellerClubClient, DEFAULT_URL, MAX_RECORDS};
