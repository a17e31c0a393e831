//! Keyed MAC computation and constant-time comparison

pub mod hmac;

pub use self::hmac::{compute_mac, constant_time_eq};
