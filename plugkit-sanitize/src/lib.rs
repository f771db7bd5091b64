//! Plugkit Sanitize - Settings sanitization engines
//!
//! This crate provides the sanitization layer that settings callbacks call
//! into:
//!
//! - Plain-text field sanitizers (single-line and textarea variants)
//! - An allow-list multi-value sanitizer that preserves input shape:
//!   bag in / bag out, serialized text in / serialized text out, and bare
//!   boolean passthrough

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod multi;
pub mod text;

// Re-export commonly used types
pub use multi::{sanitize_multiple_values, SettingInput};
pub use text::{sanitize_text_field, sanitize_textarea_field};
