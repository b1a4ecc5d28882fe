pub mod api;
pub mod calculator;
pub mod checklist;
pub mod config;
pub mod distribution;
pub mod error;
pub mod validation;
pub mod verifier;
// cmd and reports belong to the binary (main.rs).
