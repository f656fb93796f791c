pub mod assess_ward;
pub mod browse_catalog;
