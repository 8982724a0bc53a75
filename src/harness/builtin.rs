//! Built-in smoke tests covering the binding surface.

use super::binding_smoke_test;
use super::errors::{ensure, ensure_eq, SmokeResult};
use super::SmokeTest;
use crate::ffi::handles::{self, DimensionHandle};
use crate::schema::{DataType, DimensionId};
use std::collections::HashSet;

pub fn tests() -> Vec<SmokeTest> {
    vec![
        SmokeTest::new(
            binding_smoke_test::NAME,
            "Double names as \"Double\" and Blue_u16 constructs",
            binding_smoke_test::run,
        ),
        SmokeTest::new(
            "data_type_name_double",
            "Name lookup for Double returns \"Double\"",
            data_type_name_double,
        ),
        SmokeTest::new(
            "dimension_from_blue_u16",
            "A dimension constructs from Blue_u16",
            dimension_from_blue_u16,
        ),
        SmokeTest::new(
            "data_type_name_deterministic",
            "Repeated name lookups return the same string",
            data_type_name_deterministic,
        ),
        SmokeTest::new(
            "data_type_names_unique",
            "Every data type has a non-empty, unique name",
            data_type_names_unique,
        ),
        SmokeTest::new(
            "ordinals_round_trip",
            "Enumeration ordinals agree across the binding",
            ordinals_round_trip,
        ),
        SmokeTest::new(
            "handle_release",
            "Dropping a handle releases its allocation",
            handle_release,
        ),
    ]
}

fn data_type_name_double() -> SmokeResult {
    let name = handles::data_type_name(DataType::Double)?;
    ensure_eq("data_type_name_double", "Double", name.as_str())?;
    Ok(())
}

fn dimension_from_blue_u16() -> SmokeResult {
    let _dimension = DimensionHandle::new(DimensionId::BlueU16)?;
    Ok(())
}

fn data_type_name_deterministic() -> SmokeResult {
    for kind in DataType::ALL {
        let first = handles::data_type_name(kind)?;
        let second = handles::data_type_name(kind)?;
        ensure_eq("data_type_name_deterministic", first, second)?;
    }
    Ok(())
}

fn data_type_names_unique() -> SmokeResult {
    let mut seen = HashSet::new();
    for kind in DataType::ALL {
        let name = handles::data_type_name(kind)?;
        ensure(
            "data_type_names_unique",
            !name.is_empty(),
            &format!("non-empty name for ordinal {}", kind.ordinal()),
        )?;
        ensure(
            "data_type_names_unique",
            seen.insert(name.clone()),
            &format!("unique name, but '{name}' is repeated"),
        )?;
    }
    Ok(())
}

fn ordinals_round_trip() -> SmokeResult {
    for kind in DataType::ALL {
        let name = handles::data_type_name_by_ordinal(kind.ordinal())?;
        ensure_eq("ordinals_round_trip", kind.name(), name.as_str())?;
    }
    for id in DimensionId::ALL {
        let handle = DimensionHandle::from_ordinal(id.ordinal())?;
        ensure_eq("ordinals_round_trip", id, handle.dimension().id())?;
        ensure_eq(
            "ordinals_round_trip",
            Some(id.lookup().data_type),
            handle.data_type(),
        )?;
    }
    Ok(())
}

fn handle_release() -> SmokeResult {
    let handle = DimensionHandle::new(DimensionId::BlueU16)?;
    let serial = handle.serial();
    ensure("handle_release", handles::is_live(serial), "allocation live while held")?;

    drop(handle);
    ensure(
        "handle_release",
        !handles::is_live(serial),
        "allocation released after drop",
    )?;
    Ok(())
}
