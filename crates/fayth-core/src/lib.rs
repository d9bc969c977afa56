//! fayth-core
//!
//! Pure domain types and storage-key conventions.
//! No scoring logic here; this is the shared vocabulary of the Fayth
//! assessment battery: trial records, score objects, questionnaire results
//! and the per-session report bundle.

pub mod error;
pub mod models;
pub mod protocol;
pub mod storage_keys;
