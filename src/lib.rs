pub mod cli;
pub mod dicts;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod metrics;
pub mod options;
pub mod output;
