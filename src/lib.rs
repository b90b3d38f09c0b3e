pub mod api;
pub mod cli;
pub mod config;
pub mod dns;

#[cfg(test)]
mod tests;
