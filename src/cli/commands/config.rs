use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // creates the file with defaults if needed, so there is something to edit
        let cfg = ctx.config()?;
        let path = Config::config_file(&ctx.home);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ConfigLogic::print(&cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = ConfigLogic::default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match ConfigLogic::edit(&path, &editor_to_use) {
                Ok(()) => success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                )),
                Err(e) if editor_to_use != default_editor => {
                    warning(format!("{}, falling back to '{}'", e, default_editor));
                    ConfigLogic::edit(&path, &default_editor)?;
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Err(e) => {
                    error(format!("Failed to edit configuration file: {}", e));
                    return Err(e);
                }
            }

            // reject edits that no longer parse
            ctx.config()?;
        }
    }

    Ok(())
}
