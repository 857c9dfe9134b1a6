mod controller;
mod progress;
mod service;

pub use controller::{QuizController, Screen};
pub use progress::SessionProgress;
pub use service::{AdvanceOutcome, QuizSession};
