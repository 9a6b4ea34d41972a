pub mod app;
pub mod commands;
pub mod display;
pub mod validation;

pub use app::{App, Config, OutputFormat};
pub use commands::{Cli, Commands};
pub use validation::{parse_move_script, ScriptedMove, ValidationError};
