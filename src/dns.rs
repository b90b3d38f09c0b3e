use crate::api::{DnsApiClient, RecordKind, MAX_RECORDS};
use crate::cli::{DnsAction, DnsArgs};
use anyhow::Result;
use log::{info, warn};
use serde_json::Value;
use std::io::Write;

/// Runs one `dns` command against `client`.
///
/// Returns `None` when the record type is not supported; the message has then
/// been written to `out` and no request was made.
pub async fn run<W: Write>(
    client: &dyn DnsApiClient,
    args: &DnsArgs,
    out: &mut W,
) -> Result<Option<Value>> {
    let domain = args.domain.as_str();

    let result = match &args.action {
        DnsAction::Activate => {
            info!("Activating DNS for {}", domain);
            client.activate_dns(domain).await?
        }
        DnsAction::Add {
            record_type,
            name,
            value,
            ttl,
        } => {
            let Some(kind) = supported_kind(record_type, out)? else {
                return Ok(None);
            };
            info!("Adding {} record {} -> {} on {}", record_type, name, value, domain);
            client
                .add_record(kind, domain, value, Some(name.clone()), *ttl)
                .await?
        }
        DnsAction::Delete {
            record_type,
            name,
            value,
        } => {
            let Some(kind) = supported_kind(record_type, out)? else {
                return Ok(None);
            };
            info!("Deleting {} record {} -> {} on {}", record_type, name, value, domain);
            client
                .delete_record(kind, domain, value, Some(name.clone()))
                .await?
        }
        DnsAction::List { record_type, name } => {
            if supported_kind(record_type, out)?.is_none() {
                return Ok(None);
            }
            // search-records takes the user-facing type, not the path alias
            info!("Listing {} records for {} on {}", record_type, name, domain);
            client
                .search_records(domain, record_type, MAX_RECORDS, Some(name.clone()))
                .await?
        }
    };

    Ok(Some(result))
}

fn supported_kind<W: Write>(record_type: &str, out: &mut W) -> Result<Option<RecordKind>> {
    let kind = RecordKind::from_record_type(record_type);
    if kind.is_none() {
        warn!("Rejected record type {}", record_type);
        writeln!(out, "Not a supported record type: {}", record_type)?;
    }
    Ok(kind)
}
