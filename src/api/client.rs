use super::{error::ApiError, models::RecordKind};
use async_trait::async_trait;
use serde_json::Value;

// None of these apply the error check; `status: ERROR` bodies come back as `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Looks up the order id for `domain`, then activates DNS for that order.
    async fn activate_dns(&self, domain: &str) -> Result<Value, ApiError>;

    async fn search_records(
        &self,
        domain: &str,
        record_type: &str,
        no_of_records: u32,
        host: Option<String>,
    ) -> Result<Value, ApiError>;

    async fn add_record(
        &self,
        kind: RecordKind,
        domain: &str,
        value: &str,
        host: Option<String>,
        ttl: Option<u32>,
    ) -> Result<Value, ApiError>;

    async fn delete_record(
        &self,
        kind: RecordKind,
        domain: &str,
        value: &str,
        host: Option<String>,
    ) -> Result<Value, ApiError>;

    async fn add_ipv4_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
        ttl: Option<u32>,
    ) -> Result<Value, ApiError> {
        self.add_record(RecordKind::Ipv4, domain, value, host, ttl)
            .await
    }

    async fn add_ipv6_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
        ttl: Option<u32>,
    ) -> Result<Value, ApiError> {
        self.add_record(RecordKind::Ipv6, domain, value, host, ttl)
            .await
    }

    async fn add_cname_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
        ttl: Option<u32>,
    ) -> Result<Value, ApiError> {
        self.add_record(RecordKind::Cname, domain, value, host, ttl)
            .await
    }

    async fn delete_ipv4_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
    ) -> Result<Value, ApiError> {
        self.delete_record(RecordKind::Ipv4, domain, value, host).await
    }

    async fn delete_ipv6_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
    ) -> Result<Value, ApiError> {
        self.delete_record(RecordKind::Ipv6, domain, value, host).await
    }

    async fn delete_cname_record(
        &self,
        domain: &str,
        value: &str,
        host: Option<String>,
    ) -> Result<Value, ApiError> {
        self.delete_record(RecordKind::Cname, domain, value, host).await
    }
}
