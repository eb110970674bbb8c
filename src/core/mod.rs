pub mod grouping;
pub mod parser;
pub mod schedule;
pub mod session;
