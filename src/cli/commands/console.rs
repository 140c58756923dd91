use crate::config::Config;
use crate::core::console::ConsoleLogic;
use crate::errors::AppResult;

/// Handle the `console` command, also the default when no subcommand
/// is given.
pub fn handle(cfg: &Config) -> AppResult<()> {
    ConsoleLogic::run(cfg)
}
