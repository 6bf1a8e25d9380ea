// --- File: crates/trimly_common/src/lib.rs ---
pub mod logging;
pub mod services;
