//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no networking, no heavy logic. Data and simple helpers only.

pub mod config;
pub mod constants;
pub mod features;
pub mod links;
