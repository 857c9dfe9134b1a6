#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::{FlowError, SessionError};
pub use sessions::{AdvanceOutcome, QuizController, QuizSession, Screen, SessionProgress};
