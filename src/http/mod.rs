//! IP lookup over HTTP.
mod client;
mod lookup;


pub use client::{HttpIpLookup, LookupClientConfig};
pub use lookup::{IpLookup, IpResponse};
