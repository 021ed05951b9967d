//! Request middleware and the extractors that read what it stores.

pub mod session;

pub use session::{AdminAccess, CurrentSession, SessionContext, session_middleware};
