//! # Point-Cloud Schema
//!
//! Native definitions of the schema surface exposed to foreign callers:
//! storage data types, well-known dimension identifiers and the dimension
//! value object built from them.

pub mod data_type;
pub mod dimension;
pub mod dimension_id;

pub use data_type::DataType;
pub use dimension::{Dimension, Endianness};
pub use dimension_id::{DimensionId, KnownDimension};
