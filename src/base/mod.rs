//! Base types and error handling.
//!
//! Provides foundational types shared by the cookie bridge:
//! - [`NetError`](neterror::NetError): Error codes for validation, date, and store failures
//! - [`StoreResultExt`](context::StoreResultExt): Context for IO errors raised by a store

pub mod context;
pub mod neterror;

#[cfg(test)]
mod tests;
