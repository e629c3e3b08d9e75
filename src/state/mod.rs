//! Client-side state
//!
//! The admin session, the storage it is persisted in, and per-item view
//! state of the dashboard.

pub mod expansion;
pub mod session;
pub mod storage;

pub use expansion::{ExpansionState, ItemKind};
pub use session::{AdminSession, SessionState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, ADMIN_INFO_KEY, ADMIN_TOKEN_KEY};
