use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::viewer::ViewerLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `log` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { tail, all, json } = cmd {
        let path = expand_tilde(&cfg.history);
        ViewerLogic::print_recent(&path, *tail, *all, *json)?;
    }
    Ok(())
}
