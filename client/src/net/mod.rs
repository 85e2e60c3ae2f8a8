//! Networking for the email relay.
//!
//! `api` performs the REST call and `types` defines the JSON schema shared
//! with the server's `/api/send-email` handler.

pub mod api;
pub mod types;
