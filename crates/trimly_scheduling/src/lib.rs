// --- File: crates/trimly_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod dates;
pub mod error;
pub mod guard;
pub mod occupancy;
pub mod rules;
pub mod service;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
pub mod time;
