// src/services/mod.rs
pub mod dcf;
pub mod db;
