//! # Owning Handles
//!
//! Safe Rust access to the binding surface. A [`DimensionHandle`] owns exactly
//! one foreign dimension and releases it when dropped, on every exit path.

use super::c_api::{self, ForeignDimension};
use crate::error::{Result, SchemaError};
use crate::schema::{DataType, Dimension, DimensionId};
use std::ffi::CStr;
use std::ptr::NonNull;

/// Owner of one dimension allocated through the C ABI
#[derive(Debug)]
pub struct DimensionHandle {
    raw: NonNull<ForeignDimension>,
}

impl DimensionHandle {
    /// Construct a dimension through the binding from a well-known identifier
    pub fn new(id: DimensionId) -> Result<Self> {
        Self::from_ordinal(id.ordinal())
    }

    /// Construct a dimension from a raw identifier ordinal
    pub fn from_ordinal(ordinal: u32) -> Result<Self> {
        let raw = c_api::dimension_core_dimension_new(ordinal);
        NonNull::new(raw)
            .map(|raw| Self { raw })
            .ok_or_else(|| SchemaError::NullHandle(format!("dimension ordinal {ordinal}")))
    }

    pub fn dimension(&self) -> &Dimension {
        // SAFETY: `raw` came from dimension_core_dimension_new and is freed only in Drop
        unsafe { self.raw.as_ref() }.dimension()
    }

    pub fn serial(&self) -> u64 {
        unsafe { self.raw.as_ref() }.serial()
    }

    /// Data type reported by the binding, as opposed to the native value
    pub fn data_type(&self) -> Option<DataType> {
        let ordinal = unsafe { c_api::dimension_core_dimension_data_type(self.raw.as_ptr()) };
        DataType::from_ordinal(ordinal)
    }

    pub fn byte_size(&self) -> usize {
        unsafe { c_api::dimension_core_dimension_byte_size(self.raw.as_ptr()) as usize }
    }
}

impl Drop for DimensionHandle {
    fn drop(&mut self) {
        // SAFETY: the handle is the sole owner and is dropped once
        unsafe { c_api::dimension_core_dimension_free(self.raw.as_ptr()) };
    }
}

/// Look up a data type's display name through the binding
pub fn data_type_name(kind: DataType) -> Result<String> {
    data_type_name_by_ordinal(kind.ordinal())
}

/// Look up a display name for a raw data type ordinal through the binding
pub fn data_type_name_by_ordinal(ordinal: u32) -> Result<String> {
    let raw = c_api::dimension_core_data_type_name(ordinal);
    if raw.is_null() {
        return Err(SchemaError::NullHandle(format!("data type ordinal {ordinal}")));
    }
    // SAFETY: non-null names are static NUL-terminated strings
    let name = unsafe { CStr::from_ptr(raw) };
    name.to_str()
        .map(str::to_string)
        .map_err(|e| SchemaError::InvalidUtf8(e.to_string()))
}

/// Whether the allocation with this serial number is still outstanding
pub fn is_live(serial: u64) -> bool {
    c_api::dimension_core_dimension_is_live(serial)
}

pub fn live_dimensions() -> usize {
    c_api::dimension_core_live_dimensions()
}
