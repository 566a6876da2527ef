// src/handlers/mod.rs
pub mod prompt;
pub mod report;
pub mod valuation;
