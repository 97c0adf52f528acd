//! Request and response types for the Stockal REST API.
//!
//! Every endpoint wraps its payload in a uniform envelope:
//! `{code, message, data, error?}`. The structs here mirror that shape
//! field-for-field, using `camelCase` renames to match the wire format.
//! Payload structs decode with container-level defaults so fields the
//! service omits fall back to their zero values.
//!
//! - [`auth`] — Login request/response types
//! - [`account`] — Account summary and portfolio summary types
//! - [`portfolio`] — Holdings and portfolio detail types

pub mod account;
pub mod auth;
pub mod portfolio;
