//! # Utilities Library
//!
//! Shared utility functions for base64 decoding, sequence helpers, and
//! timestamp conversions to and from the protobuf wire type.

pub mod b64;
pub mod seq;
pub mod time;

// Re-export commonly used functions
pub use b64::{b64_decode, b64_decode_to_string, b64_encode};
pub use seq::{dedupe, duplicates};
pub use time::{format_time, from_proto_timestamp, now_utc, parse_utc, to_proto_timestamp};
