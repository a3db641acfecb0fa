//! Shared test harness
//!
//! Each test binary pulls in the parts it needs.
#![allow(dead_code)]

pub mod config;
pub mod mock_provider;
pub mod server;
