pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage DNS records through the ResellerClub HTTP API
#[derive(Parser, Debug)]
#[command(name = "resellerclub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read credentials from a YAML file instead of the environment
    #[arg(short, long, global = true, env = "RESELLERCLUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with the DNS zone of a domain
    Dns(DnsArgs),
}

#[derive(Parser, Debug)]
#[command(after_help = "Currently supported record types: A, AAAA, CNAME\n\n\
Examples:\n  \
resellerclub dns example.org add A foo 8.8.8.8\n  \
resellerclub dns example.org delete A foo 8.8.8.8")]
pub struct DnsArgs {
    /// Domain whose zone is managed
    pub domain: String,

    #[command(subcommand)]
    pub action: DnsAction,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DnsAction {
    /// Add a record for the given name
    Add {
        record_type: String,
        name: String,
        value: String,
        /// Record TTL in seconds
        #[arg(long)]
        ttl: Option<u32>,
    },

    /// Remove a record for the given name
    Delete {
        record_type: String,
        name: String,
        value: String,
    },

    /// Show all records of a type for the given name
    List { record_type: String, name: String },

    /// Activate DNS service for the domain
    Activate,
}
