//! Shared library modules for `triage-agent` tests and binary wiring.
//!
//! The `triage` binary (`main.rs`) parses the command line, loads settings,
//! and hands a fully wired [`AppState`](triage_server::server::AppState) to
//! the HTTP server. This `lib.rs` exposes that wiring to integration tests.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod cli;
