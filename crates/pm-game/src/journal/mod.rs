//! Journal of everything that happened in a session.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
