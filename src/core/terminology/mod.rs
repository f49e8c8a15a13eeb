//! Terminology tables and mapping
//!
//! - [`tables`] - Fixed profile URIs, code system URIs and lookup tables
//! - [`mapper`] - Pure lookup functions with identity/absent fallbacks

pub mod mapper;
pub mod tables;

pub use mapper::{
    map_code_system, map_discharge_disposition, map_encounter_class, normalize_status, vocabulary,
};
