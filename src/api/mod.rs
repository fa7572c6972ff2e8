//! HTTP API
//!
//! Client for the agent backend.

pub mod client;

pub use client::*;
