//! doctalk-storage
//!
//! Quiz history persistence. A store is injected into whatever runs the
//! quiz; the engine itself never touches storage.

pub mod error;
pub mod history;
pub mod objects;
pub mod state;
