//! # Well-Known Dimension Identifiers
//!
//! Identifiers for the dimensions the library knows by heart, together with the
//! record (name, storage type, description) each one resolves to. Like
//! [`DataType`], the ordinals are part of the binding contract.

use super::data_type::DataType;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a well-known dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum DimensionId {
    XI32 = 0,
    YI32 = 1,
    ZI32 = 2,
    XF64 = 3,
    YF64 = 4,
    ZF64 = 5,
    RedU8 = 6,
    GreenU8 = 7,
    BlueU8 = 8,
    RedU16 = 9,
    GreenU16 = 10,
    BlueU16 = 11,
    TimeU64 = 12,
    IntensityU8 = 13,
    IntensityU16 = 14,
    LasReturnNumber = 15,
    LasNumberOfReturns = 16,
    LasScanDirectionFlag = 17,
    LasEdgeOfFlightLine = 18,
    LasClassification = 19,
    LasScanAngleRank = 20,
    LasUserData = 21,
    LasPointSourceId = 22,
    LasTime = 23,
    Undefined = 24,
}

/// The record a [`DimensionId`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDimension {
    pub id: DimensionId,
    pub name: &'static str,
    pub data_type: DataType,
    pub description: &'static str,
}

impl DimensionId {
    /// Every identifier, in ordinal order
    pub const ALL: [DimensionId; 25] = [
        DimensionId::XI32,
        DimensionId::YI32,
        DimensionId::ZI32,
        DimensionId::XF64,
        DimensionId::YF64,
        DimensionId::ZF64,
        DimensionId::RedU8,
        DimensionId::GreenU8,
        DimensionId::BlueU8,
        DimensionId::RedU16,
        DimensionId::GreenU16,
        DimensionId::BlueU16,
        DimensionId::TimeU64,
        DimensionId::IntensityU8,
        DimensionId::IntensityU16,
        DimensionId::LasReturnNumber,
        DimensionId::LasNumberOfReturns,
        DimensionId::LasScanDirectionFlag,
        DimensionId::LasEdgeOfFlightLine,
        DimensionId::LasClassification,
        DimensionId::LasScanAngleRank,
        DimensionId::LasUserData,
        DimensionId::LasPointSourceId,
        DimensionId::LasTime,
        DimensionId::Undefined,
    ];

    /// Identifier text as foreign callers spell it, e.g. `Blue_u16`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XI32 => "X_i32",
            Self::YI32 => "Y_i32",
            Self::ZI32 => "Z_i32",
            Self::XF64 => "X_f64",
            Self::YF64 => "Y_f64",
            Self::ZF64 => "Z_f64",
            Self::RedU8 => "Red_u8",
            Self::GreenU8 => "Green_u8",
            Self::BlueU8 => "Blue_u8",
            Self::RedU16 => "Red_u16",
            Self::GreenU16 => "Green_u16",
            Self::BlueU16 => "Blue_u16",
            Self::TimeU64 => "Time_u64",
            Self::IntensityU8 => "Intensity_u8",
            Self::IntensityU16 => "Intensity_u16",
            Self::LasReturnNumber => "Las_ReturnNumber",
            Self::LasNumberOfReturns => "Las_NumberOfReturns",
            Self::LasScanDirectionFlag => "Las_ScanDirectionFlag",
            Self::LasEdgeOfFlightLine => "Las_EdgeOfFlightLine",
            Self::LasClassification => "Las_Classification",
            Self::LasScanAngleRank => "Las_ScanAngleRank",
            Self::LasUserData => "Las_UserData",
            Self::LasPointSourceId => "Las_PointSourceId",
            Self::LasTime => "Las_Time",
            Self::Undefined => "Undefined",
        }
    }

    /// Resolve the identifier to its known dimension record
    pub fn lookup(&self) -> KnownDimension {
        let (name, data_type, description) = match self {
            Self::XI32 => ("X", DataType::Int32, "x coordinate as a long integer"),
            Self::YI32 => ("Y", DataType::Int32, "y coordinate as a long integer"),
            Self::ZI32 => ("Z", DataType::Int32, "z coordinate as a long integer"),
            Self::XF64 => ("X", DataType::Double, "x coordinate as a double"),
            Self::YF64 => ("Y", DataType::Double, "y coordinate as a double"),
            Self::ZF64 => ("Z", DataType::Double, "z coordinate as a double"),
            Self::RedU8 => ("Red", DataType::Uint8, "red image channel value"),
            Self::GreenU8 => ("Green", DataType::Uint8, "green image channel value"),
            Self::BlueU8 => ("Blue", DataType::Uint8, "blue image channel value"),
            Self::RedU16 => ("Red", DataType::Uint16, "red image channel value"),
            Self::GreenU16 => ("Green", DataType::Uint16, "green image channel value"),
            Self::BlueU16 => ("Blue", DataType::Uint16, "blue image channel value"),
            Self::TimeU64 => ("Time", DataType::Uint64, "time of the point, in microseconds"),
            Self::IntensityU8 => ("Intensity", DataType::Uint8, "pulse return magnitude"),
            Self::IntensityU16 => ("Intensity", DataType::Uint16, "pulse return magnitude"),
            Self::LasReturnNumber => (
                "ReturnNumber",
                DataType::Uint8,
                "pulse return number for a given output pulse",
            ),
            Self::LasNumberOfReturns => (
                "NumberOfReturns",
                DataType::Uint8,
                "total number of returns for a given pulse",
            ),
            Self::LasScanDirectionFlag => (
                "ScanDirectionFlag",
                DataType::Uint8,
                "direction of the scanner mirror at the time of the output pulse",
            ),
            Self::LasEdgeOfFlightLine => (
                "EdgeOfFlightLine",
                DataType::Uint8,
                "set on the last point before the scan changes direction",
            ),
            Self::LasClassification => (
                "Classification",
                DataType::Uint8,
                "ASPRS classification of the point",
            ),
            Self::LasScanAngleRank => (
                "ScanAngleRank",
                DataType::Int8,
                "angle of the output laser pulse, rounded to the nearest degree",
            ),
            Self::LasUserData => ("UserData", DataType::Uint8, "user-defined field"),
            Self::LasPointSourceId => (
                "PointSourceId",
                DataType::Uint16,
                "file source id the point originated from",
            ),
            Self::LasTime => ("Time", DataType::Double, "GPS time of the point"),
            Self::Undefined => ("Undefined", DataType::Undefined, "undefined dimension"),
        };

        KnownDimension {
            id: *self,
            name,
            data_type,
            description,
        }
    }

    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DimensionId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| SchemaError::UnknownDimensionId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_u16_record() {
        let known = DimensionId::BlueU16.lookup();
        assert_eq!(known.id, DimensionId::BlueU16);
        assert_eq!(known.name, "Blue");
        assert_eq!(known.data_type, DataType::Uint16);
    }

    #[test]
    fn test_identifier_text_round_trip() {
        for id in DimensionId::ALL {
            assert_eq!(id.as_str().parse::<DimensionId>(), Ok(id));
        }
        assert!("Blue_u32".parse::<DimensionId>().is_err());
    }

    #[test]
    fn test_ordinals_match_positions() {
        for (position, id) in DimensionId::ALL.iter().enumerate() {
            assert_eq!(id.ordinal() as usize, position);
        }
        assert_eq!(DimensionId::from_ordinal(11), Some(DimensionId::BlueU16));
        assert_eq!(DimensionId::from_ordinal(25), None);
    }

    #[test]
    fn test_only_undefined_has_no_storage() {
        for id in DimensionId::ALL {
            let known = id.lookup();
            assert!(!known.name.is_empty());
            assert_eq!(
                known.data_type == DataType::Undefined,
                id == DimensionId::Undefined,
                "{id}"
            );
        }
    }
}
