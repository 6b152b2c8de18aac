use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                info(format!(
                    "No configuration file at {}, run `journal init` first.",
                    path.display()
                ));
                return Ok(());
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }

            if editor_to_use == default_editor {
                return Err(AppError::Config(format!(
                    "Failed to edit configuration file using '{}'",
                    editor_to_use
                )));
            }

            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            if !run_editor(&default_editor, &path) {
                return Err(AppError::Config(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )));
            }

            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
        }
    }

    Ok(())
}

/// Run `editor` on `path`; true only if it exited successfully.
fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
