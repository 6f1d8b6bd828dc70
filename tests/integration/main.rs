//! Integration tests

mod client_test;
mod common;
mod config_test;
mod session_test;
