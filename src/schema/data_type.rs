//! # Storage Data Types
//!
//! The primitive storage types a dimension can take. Ordinals are part of the
//! binding contract and must never be reordered: foreign callers pass them
//! across the C ABI as plain integers.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::ffi::CStr;
use std::fmt;

/// Generates both name lookups from a single list of names
macro_rules! data_type_names {
    ($($variant:ident => $name:literal,)*) => {
        impl DataType {
            /// Display name of the data type
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Display name as a NUL-terminated string for the C ABI
            pub fn c_name(&self) -> &'static CStr {
                match self {
                    $(Self::$variant => const {
                        match CStr::from_bytes_with_nul(concat!($name, "\0").as_bytes()) {
                            Ok(name) => name,
                            Err(_) => panic!("data type name contains an interior NUL"),
                        }
                    },)*
                }
            }
        }
    };
}

/// Primitive storage type of a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum DataType {
    Int8 = 0,
    Uint8 = 1,
    Int16 = 2,
    Uint16 = 3,
    Int32 = 4,
    Uint32 = 5,
    Int64 = 6,
    Uint64 = 7,
    Float = 8,
    Double = 9,
    Undefined = 10,
}

data_type_names! {
    Int8 => "Int8",
    Uint8 => "Uint8",
    Int16 => "Int16",
    Uint16 => "Uint16",
    Int32 => "Int32",
    Uint32 => "Uint32",
    Int64 => "Int64",
    Uint64 => "Uint64",
    Float => "Float",
    Double => "Double",
    Undefined => "Undefined",
}

impl DataType {
    /// Every data type, in ordinal order
    pub const ALL: [DataType; 11] = [
        DataType::Int8,
        DataType::Uint8,
        DataType::Int16,
        DataType::Uint16,
        DataType::Int32,
        DataType::Uint32,
        DataType::Int64,
        DataType::Uint64,
        DataType::Float,
        DataType::Double,
        DataType::Undefined,
    ];

    /// Size of one value, in bytes. `Undefined` has no storage.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float => 4,
            Self::Int64 | Self::Uint64 | Self::Double => 8,
            Self::Undefined => 0,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Float | Self::Double
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Uint8
                | Self::Int16
                | Self::Uint16
                | Self::Int32
                | Self::Uint32
                | Self::Int64
                | Self::Uint64
        )
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DataType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| SchemaError::UnknownDataType(s.to_string()))
    }
}
