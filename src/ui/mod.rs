// Wed Jan 15 2026 - Alex

pub mod banner;
pub mod cli;
pub mod progress;

pub use banner::Banner;
pub use cli::{Args, CommandHandler};
pub use progress::ProgressManager;

