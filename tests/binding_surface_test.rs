//! Binding Surface Tests
//!
//! Exercises the exported surface the way a foreign caller would: through the
//! C ABI and the owning handles, checked against the native definitions.

use dimension_core::config::HarnessConfig;
use dimension_core::ffi::c_api;
use dimension_core::ffi::handles::{self, DimensionHandle};
use dimension_core::harness::{binding_smoke_test, SmokeRegistry, SmokeTest, TestStatus};
use dimension_core::{DataType, Dimension, DimensionId, SchemaError};
use std::collections::HashSet;
use std::ffi::CStr;

#[test]
fn test_double_names_as_double() {
    assert_eq!(handles::data_type_name(DataType::Double).unwrap(), "Double");
}

#[test]
fn test_blue_u16_constructs() {
    let native = Dimension::new(DimensionId::BlueU16);
    let handle = DimensionHandle::new(DimensionId::BlueU16).expect("construction succeeds");
    assert_eq!(handle.dimension(), &native);
}

#[test]
fn test_name_lookup_is_deterministic() {
    for kind in DataType::ALL {
        let names: HashSet<String> = (0..5)
            .map(|_| handles::data_type_name(kind).unwrap())
            .collect();
        assert_eq!(names.len(), 1, "{kind:?}");
    }
}

#[test]
fn test_every_kind_has_unique_non_empty_name() {
    let names: Vec<String> = DataType::ALL
        .iter()
        .map(|kind| handles::data_type_name(*kind).unwrap())
        .collect();
    let unique: HashSet<&String> = names.iter().collect();

    assert!(names.iter().all(|name| !name.is_empty()));
    assert_eq!(unique.len(), DataType::ALL.len());
}

#[test]
fn test_sizes_agree_across_abi() {
    for kind in DataType::ALL {
        assert_eq!(
            c_api::dimension_core_data_type_size(kind.ordinal()),
            kind.size_in_bytes() as i32
        );
    }
}

#[test]
fn test_raw_abi_round_trip() {
    let raw = c_api::dimension_core_dimension_new(DimensionId::LasClassification.ordinal());
    assert!(!raw.is_null());

    unsafe {
        let ordinal = c_api::dimension_core_dimension_data_type(raw);
        let name = CStr::from_ptr(c_api::dimension_core_data_type_name(ordinal));
        assert_eq!(name.to_str().unwrap(), "Uint8");

        let serial = c_api::dimension_core_dimension_serial(raw);
        c_api::dimension_core_dimension_free(raw);
        assert!(!c_api::dimension_core_dimension_is_live(serial));
    }
}

#[test]
fn test_handles_release_when_scope_unwinds() {
    let serial = std::panic::catch_unwind(|| {
        let handle = DimensionHandle::new(DimensionId::GreenU16).unwrap();
        std::panic::panic_any(handle.serial());
    })
    .unwrap_err()
    .downcast::<u64>()
    .map(|serial| *serial)
    .unwrap();

    assert!(!handles::is_live(serial));
}

#[test]
fn test_unknown_identifier_is_reported() {
    assert!(matches!(
        DimensionHandle::from_ordinal(DimensionId::ALL.len() as u32),
        Err(SchemaError::NullHandle(_))
    ));
}

#[test]
fn test_binding_smoke_test_passes() {
    assert!(binding_smoke_test::run().is_ok());
}

#[test]
fn test_registry_runs_builtin_and_custom_tests() {
    fn custom_dimension_constructs() -> dimension_core::harness::SmokeResult {
        Dimension::custom("Reflectance", DataType::Float)?;
        Ok(())
    }

    let mut registry = SmokeRegistry::builtin();
    registry
        .register(SmokeTest::new(
            "custom_dimension_constructs",
            "User-defined dimensions construct",
            custom_dimension_constructs,
        ))
        .unwrap();

    let report = registry.run(&HarnessConfig::default());
    assert!(report.is_success(), "{report}");
    assert_eq!(
        report.outcomes.last().map(|o| (o.name.as_str(), o.status)),
        Some(("custom_dimension_constructs", TestStatus::Passed))
    );
}

#[test]
fn test_report_serializes_to_json() {
    let config = HarnessConfig {
        filter: Some("binding_smoke_test".to_string()),
        ..Default::default()
    };
    let report = SmokeRegistry::builtin().run(&config);
    let json = serde_json::to_value(&report).unwrap();

    let outcomes = json["outcomes"].as_array().unwrap();
    let ran: Vec<&serde_json::Value> = outcomes
        .iter()
        .filter(|o| o["status"] != "skipped")
        .collect();
    assert_eq!(ran.len(), 1);
    assert_eq!(ran[0]["name"], "binding_smoke_test");
    assert_eq!(ran[0]["status"], "passed");
}
