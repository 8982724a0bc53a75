#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Dimension Core
//!
//! Point-cloud dimension schema with a C ABI binding surface and a smoke-test
//! harness that validates that surface.
//!
//! ## Overview
//!
//! Foreign callers see three things: an enumeration of storage data types with
//! a stable display-name lookup, an enumeration of well-known dimension
//! identifiers, and a `Dimension` value object constructed from one of those
//! identifiers. This crate defines all three natively, exports them through a
//! C ABI with opaque owning handles, and ships a harness that checks the
//! exported surface still agrees with the native definitions.
//!
//! ## Module Organization
//!
//! - [`schema`] - Data types, dimension identifiers and dimensions
//! - [`ffi`] - C ABI and owning handles
//! - [`harness`] - Registry of named smoke tests and run reports
//! - [`config`] - Harness configuration loading
//! - [`logging`] - Structured logging
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use dimension_core::harness::binding_smoke_test;
//! use dimension_core::schema::{DataType, Dimension, DimensionId};
//!
//! assert_eq!(DataType::Double.name(), "Double");
//!
//! let blue = Dimension::new(DimensionId::BlueU16);
//! assert_eq!(blue.to_string(), "Blue (Uint16)");
//!
//! binding_smoke_test::run().expect("binding surface is intact");
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod harness;
pub mod logging;
pub mod schema;

pub use config::{ConfigManager, HarnessConfig, LogFormat, LoggingConfig};
pub use error::{Result, SchemaError};
pub use ffi::DimensionHandle;
pub use harness::{AssertionFailure, SmokeError, SmokeRegistry, SmokeReport, SmokeTest};
pub use schema::{DataType, Dimension, DimensionId, Endianness};
