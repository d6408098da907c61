use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
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

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                Config::init_all(Some(cfg.data_dir.clone()), false)?;
            }
            edit_file(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Open `path` with `requested` (or the default editor). A requested editor
/// that fails falls back to the default one before giving up.
fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let mut candidates = vec![requested.unwrap_or(fallback.as_str())];
    if requested.is_some_and(|r| r != fallback) {
        candidates.push(&fallback);
    }

    for (i, editor) in candidates.iter().enumerate() {
        if launch(editor, path) {
            success(format!("Configuration file edited with '{}'", editor));
            return Ok(());
        }
        if let Some(next) = candidates.get(i + 1) {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor, next
            ));
        }
    }

    Err(AppError::Config(format!(
        "failed to edit {} with '{}'",
        path.display(),
        candidates.last().copied().unwrap_or(fallback.as_str())
    )))
}
