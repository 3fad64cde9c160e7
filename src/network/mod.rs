//! HTTP transport for bid requests and tracking pixels.

pub mod client;

pub use client::{OpenRtbClient, TransportError};
