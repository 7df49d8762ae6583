pub mod affordability;
pub mod assessor;
pub mod report;
pub mod types;
