use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///
/// The history file itself is never created here: the first logged
/// event creates it with its header row.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing fieldaid…");

    let cfg = Config::init_all(cli.history.clone(), cli.test)?;

    println!("📄 Config file  : {}", Config::config_file().display());
    println!("🗄️  Job history : {}", expand_tilde(&cfg.history).display());

    println!("🎉 fieldaid is ready. Run `fieldaid` to open the console.");
    Ok(())
}
