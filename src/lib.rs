pub mod config;
pub mod error;
pub mod eval;

pub use config::Config;
pub use error::{EvalError, Result};
pub use eval::{evaluate, load_labels, load_scores, Direction, EvalReport};
