//! Shared fixtures for integration tests against local stub servers.
#![allow(dead_code)]

pub mod mock_server;
pub mod stream_stub;
