//! Functional core for realmlink.
//!
//! Everything here is free of I/O: building authorization request URLs
//! and rendering callback responses. The HTTP layer lives in the
//! `realmlink` crate.

pub mod authorize;
