pub mod sample;
pub mod serve;
pub mod watch;

/// Shared command result type.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
