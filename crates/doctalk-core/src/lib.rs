//! doctalk-core
//!
//! Shared vocabulary of the DocTalk symptom quiz: categories, risk tiers,
//! quiz results, user identity and storage key conventions. Pure types,
//! no I/O.

pub mod error;
pub mod models;
pub mod storage_keys;
