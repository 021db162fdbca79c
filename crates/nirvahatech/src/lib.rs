//! Marketing site for nirvahatech: landing and careers pages plus the two
//! lead-capture forms that forward to the external intake API.

pub mod config;
pub mod error;
pub mod forms;
pub mod site;
pub mod telemetry;
