//! # Dimension
//!
//! A named, typed channel of per-point data together with the numeric scaling
//! that maps stored values onto real-world units.

use super::data_type::DataType;
use super::dimension_id::DimensionId;
use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte order a dimension is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DimensionRecord")]
pub struct Dimension {
    id: DimensionId,
    name: String,
    data_type: DataType,
    description: String,
    endianness: Endianness,
    numeric_scale: f64,
    numeric_offset: f64,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl Dimension {
    /// Construct the dimension a well-known identifier resolves to
    pub fn new(id: DimensionId) -> Self {
        let known = id.lookup();
        Self {
            id,
            name: known.name.to_string(),
            data_type: known.data_type,
            description: known.description.to_string(),
            endianness: Endianness::default(),
            numeric_scale: 1.0,
            numeric_offset: 0.0,
            minimum: None,
            maximum: None,
        }
    }

    /// Construct a user-defined dimension outside the well-known set
    pub fn custom(name: &str, data_type: DataType) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            id: DimensionId::Undefined,
            name: name.to_string(),
            data_type,
            description: String::new(),
            endianness: Endianness::default(),
            numeric_scale: 1.0,
            numeric_offset: 0.0,
            minimum: None,
            maximum: None,
        })
    }

    pub fn id(&self) -> DimensionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn numeric_scale(&self) -> f64 {
        self.numeric_scale
    }

    pub fn numeric_offset(&self) -> f64 {
        self.numeric_offset
    }

    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    pub fn byte_size(&self) -> usize {
        self.data_type.size_in_bytes()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    pub fn set_numeric_scale(&mut self, scale: f64) -> Result<()> {
        validate_scale(scale)?;
        self.numeric_scale = scale;
        Ok(())
    }

    pub fn set_numeric_offset(&mut self, offset: f64) {
        self.numeric_offset = offset;
    }

    /// Record the value range. Both bounds must be finite and ordered.
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        validate_bounds(Some(minimum), Some(maximum))?;
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        Ok(())
    }

    /// Map a stored value onto real-world units
    pub fn apply_scaling(&self, raw: i64) -> f64 {
        raw as f64 * self.numeric_scale + self.numeric_offset
    }

    /// Map a real-world value back onto the nearest stored value
    pub fn remove_scaling(&self, value: f64) -> i64 {
        ((value - self.numeric_offset) / self.numeric_scale).round() as i64
    }

    /// Whether `value` lies within the recorded bounds. Unbounded sides always pass.
    pub fn contains(&self, value: f64) -> bool {
        self.minimum.map_or(true, |min| value >= min)
            && self.maximum.map_or(true, |max| value <= max)
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.data_type == other.data_type
            && self.endianness == other.endianness
            && self.numeric_scale == other.numeric_scale
            && self.numeric_offset == other.numeric_offset
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.data_type)
    }
}

/// Wire form of a [`Dimension`]; converted through the same checks as the setters
#[derive(Deserialize)]
struct DimensionRecord {
    id: DimensionId,
    name: String,
    data_type: DataType,
    #[serde(default)]
    description: String,
    #[serde(default)]
    endianness: Endianness,
    numeric_scale: f64,
    numeric_offset: f64,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl TryFrom<DimensionRecord> for Dimension {
    type Error = SchemaError;

    fn try_from(record: DimensionRecord) -> Result<Self> {
        validate_name(&record.name)?;
        validate_scale(record.numeric_scale)?;
        validate_bounds(record.minimum, record.maximum)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            data_type: record.data_type,
            description: record.description,
            endianness: record.endianness,
            numeric_scale: record.numeric_scale,
            numeric_offset: record.numeric_offset,
            minimum: record.minimum,
            maximum: record.maximum,
        })
    }
}

fn validate_scale(scale: f64) -> Result<()> {
    if scale == 0.0 || !scale.is_finite() {
        return Err(SchemaError::InvalidScale(scale));
    }
    Ok(())
}

fn validate_bounds(minimum: Option<f64>, maximum: Option<f64>) -> Result<()> {
    let invalid = || SchemaError::InvalidBounds {
        minimum: minimum.unwrap_or(f64::NEG_INFINITY),
        maximum: maximum.unwrap_or(f64::INFINITY),
    };
    if minimum.is_some_and(|min| !min.is_finite()) || maximum.is_some_and(|max| !max.is_finite())
    {
        return Err(invalid());
    }
    if let (Some(min), Some(max)) = (minimum, maximum) {
        if min > max {
            return Err(invalid());
        }
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SchemaError::InvalidDimensionName {
            name: name.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(SchemaError::InvalidDimensionName {
            name: name.to_string(),
            reason: format!("invalid character '{c}'"),
        });
    }
    Ok(())
}
