//! Data Transfer Objects for the build server API
//!
//! Wire representations of the JSON documents returned by the build server.
//! They are converted into domain types before leaving the client.

pub mod build;
