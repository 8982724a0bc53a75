//! # C ABI
//!
//! The binding surface foreign callers link against. Enumerations cross the
//! boundary as `u32` ordinals; dimensions cross it as opaque pointers that must
//! be released with [`dimension_core_dimension_free`].
//!
//! Every allocation carries a serial number recorded in a live set, so callers
//! can verify release without relying on pointer addresses.

use crate::logging::log_binding_operation;
use crate::schema::{DataType, Dimension, DimensionId};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::ffi::c_char;
use std::sync::atomic::{AtomicU64, Ordering};

/// Returned by [`dimension_core_dimension_data_type`] for a null dimension
pub const NULL_DATA_TYPE: u32 = u32::MAX;

/// Serial numbers start at 1, so 0 never names a live allocation
pub const NULL_SERIAL: u64 = 0;

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);
static LIVE_DIMENSIONS: Mutex<BTreeSet<u64>> = Mutex::new(BTreeSet::new());

/// Opaque dimension owned by a foreign caller
pub struct ForeignDimension {
    serial: u64,
    dimension: Dimension,
}

impl ForeignDimension {
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }
}

/// Display name of a data type, or null for an unknown ordinal.
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn dimension_core_data_type_name(ordinal: u32) -> *const c_char {
    match DataType::from_ordinal(ordinal) {
        Some(kind) => kind.c_name().as_ptr(),
        None => {
            log_binding_operation("data_type_name", "unknown_ordinal", None);
            std::ptr::null()
        }
    }
}

/// Size in bytes of a data type, or -1 for an unknown ordinal
#[no_mangle]
pub extern "C" fn dimension_core_data_type_size(ordinal: u32) -> i32 {
    DataType::from_ordinal(ordinal).map_or(-1, |kind| kind.size_in_bytes() as i32)
}

/// Construct the dimension a well-known identifier resolves to.
/// Returns null for an unknown ordinal.
#[no_mangle]
pub extern "C" fn dimension_core_dimension_new(id_ordinal: u32) -> *mut ForeignDimension {
    let Some(id) = DimensionId::from_ordinal(id_ordinal) else {
        log_binding_operation("dimension_new", "unknown_ordinal", None);
        return std::ptr::null_mut();
    };

    let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
    LIVE_DIMENSIONS.lock().insert(serial);
    log_binding_operation("dimension_new", "allocated", Some(id.as_str()));

    Box::into_raw(Box::new(ForeignDimension {
        serial,
        dimension: Dimension::new(id),
    }))
}

/// Release a dimension. Null is ignored.
///
/// # Safety
///
/// `dimension` must be null or a pointer returned by
/// [`dimension_core_dimension_new`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn dimension_core_dimension_free(dimension: *mut ForeignDimension) {
    if dimension.is_null() {
        return;
    }
    let owned = Box::from_raw(dimension);
    LIVE_DIMENSIONS.lock().remove(&owned.serial);
    log_binding_operation("dimension_free", "released", Some(owned.dimension.name()));
}

/// Data type ordinal of a dimension, or [`NULL_DATA_TYPE`] for null
///
/// # Safety
///
/// `dimension` must be null or a live pointer returned by
/// [`dimension_core_dimension_new`].
#[no_mangle]
pub unsafe extern "C" fn dimension_core_dimension_data_type(
    dimension: *const ForeignDimension,
) -> u32 {
    dimension
        .as_ref()
        .map_or(NULL_DATA_TYPE, |owned| owned.dimension.data_type().ordinal())
}

/// Storage size of a dimension in bytes, or 0 for null
///
/// # Safety
///
/// `dimension` must be null or a live pointer returned by
/// [`dimension_core_dimension_new`].
#[no_mangle]
pub unsafe extern "C" fn dimension_core_dimension_byte_size(
    dimension: *const ForeignDimension,
) -> u32 {
    dimension
        .as_ref()
        .map_or(0, |owned| owned.dimension.byte_size() as u32)
}

/// Serial number of a dimension allocation, or [`NULL_SERIAL`] for null
///
/// # Safety
///
/// `dimension` must be null or a live pointer returned by
/// [`dimension_core_dimension_new`].
#[no_mangle]
pub unsafe extern "C" fn dimension_core_dimension_serial(dimension: *const ForeignDimension) -> u64 {
    dimension.as_ref().map_or(NULL_SERIAL, |owned| owned.serial)
}

/// Whether the allocation with this serial number has not been released
#[no_mangle]
pub extern "C" fn dimension_core_dimension_is_live(serial: u64) -> bool {
    LIVE_DIMENSIONS.lock().contains(&serial)
}

/// Number of dimensions allocated and not yet released
#[no_mangle]
pub extern "C" fn dimension_core_live_dimensions() -> usize {
    LIVE_DIMENSIONS.lock().len()
}
