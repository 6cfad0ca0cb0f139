//! # waproxy-core
//!
//! Core types, configuration, and error handling for the waproxy front-end.

pub mod chat_id;
pub mod config;
pub mod error;
pub mod message;
