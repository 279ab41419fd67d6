//! Entity Data Model vocabulary and type mapping

pub mod constants;
pub mod mapper;

pub use mapper::{map_type, matching_rule};
