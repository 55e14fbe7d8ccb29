//! Core domain types
//!
//! This module contains the structures shared between the client (which
//! produces status records) and the CLI (which renders them).

pub mod attribute;
pub mod outcome;
pub mod repository;
pub mod status;
