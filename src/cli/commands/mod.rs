//! Command implementations for the bulk validator CLI
//!
//! Each subcommand lives in its own module; `run` dispatches to them.

pub mod reference;
pub mod shared;
pub mod validate;

use crate::app::models::ValidationResponse;
use crate::cli::args::{Args, Commands};
use anyhow::{Result, bail};

/// How a command finished, used by the binary to pick an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran; a validated batch may still have rejected rows
    Completed,
    /// The batch could not be validated at all
    RequestFailed,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandOutcome::Completed => 0,
            CommandOutcome::RequestFailed => 1,
        }
    }
}

impl From<&ValidationResponse> for CommandOutcome {
    fn from(response: &ValidationResponse) -> Self {
        match response {
            ValidationResponse::Success(_) => CommandOutcome::Completed,
            ValidationResponse::Failure(_) => CommandOutcome::RequestFailed,
        }
    }
}

/// Main command runner
///
/// Dispatches to the subcommand handler named in the arguments.
pub async fn run(args: Args) -> Result<CommandOutcome> {
    match args.command {
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        Some(Commands::Reference(reference_args)) => {
            reference::run_reference(reference_args).await
        }
        None => bail!("No command given"),
    }
}
