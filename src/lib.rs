pub mod cli;
pub mod diff;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod report;
pub mod uncovered;
