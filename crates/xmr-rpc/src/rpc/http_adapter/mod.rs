//! HTTP transport for Monero RPC endpoints.
//!
//! Implements [`JsonRpcInvoker`](super::JsonRpcInvoker) over
//! `POST <endpoint>/json_rpc` and [`PlainHttpInvoker`](super::PlainHttpInvoker)
//! for the daemon's non-enveloped JSON paths, both using `reqwest`.

mod client;
mod connection;
mod protocol;

pub use client::HttpTransport;
