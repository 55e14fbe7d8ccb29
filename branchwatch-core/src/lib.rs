//! Branchwatch Core
//!
//! Core types for the branchwatch build-status reporter.
//!
//! This crate contains:
//! - Domain types: repository references, normalized status records, outcomes
//! - DTOs: the build server's wire format

pub mod domain;
pub mod dto;
