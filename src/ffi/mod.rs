pub mod c_api;
pub mod handles;

pub use handles::{data_type_name, data_type_name_by_ordinal, DimensionHandle};
