//! Command handler modules for the liardice CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum; [`crate::run`] prints them

mod cfg;
mod play;
mod prob;
mod roll;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use prob::{ProbRequest, handle_prob_command};
pub use roll::handle_roll_command;
