//! Column definitions for tables

mod base;

pub use base::{ColumnDescriptor, ColumnType};
