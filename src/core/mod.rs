pub mod audit;
pub mod log;
pub mod report;
