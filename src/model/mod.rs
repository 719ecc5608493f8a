//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod candidates;
pub mod error;
pub mod key_action;
pub mod notification;

// Re-export for convenience
pub use candidates::{CandidateSet, SYDNEY_SUBURBS};
pub use error::{AppError, CandidateError};
pub use key_action::KeyAction;
pub use notification::NotificationKind;
