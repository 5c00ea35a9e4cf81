pub mod interactive;
pub mod report;
