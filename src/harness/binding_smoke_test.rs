//! # Binding Smoke Test
//!
//! Minimal check that the binding surface loads and agrees with the native
//! schema: the `Double` data type names as `"Double"`, and a dimension can be
//! constructed from `Blue_u16`.

use super::errors::{ensure_eq, SmokeResult};
use crate::ffi::{data_type_name, DimensionHandle};
use crate::schema::{DataType, DimensionId};

pub const NAME: &str = "binding_smoke_test";

pub fn run() -> SmokeResult {
    let name = data_type_name(DataType::Double)?;
    ensure_eq(NAME, "Double", name.as_str())?;

    // Construction alone is the contract; the handle is released on return
    let _dimension = DimensionHandle::new(DimensionId::BlueU16)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_passes() {
        assert_eq!(run(), Ok(()));
    }
}
