//! Hosted authentication service adapter

mod client;

pub use client::HostedAuthClient;
