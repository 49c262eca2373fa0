//! Handlers for the `config` subcommands.
//!
//! The handlers are generic over [`ConfigManager`] and return the text to
//! print, so the dispatch in [`handle_config_command`] is the only place that
//! writes to stdout.

use std::path::PathBuf;

use pokereport_core::config::ConfigManager;
use pokereport_core::{Error, ReportConfig, Result};

use crate::cli::ConfigAction;

/// Runs a config subcommand against [`ReportConfig`] and prints its result.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let output = match action {
        ConfigAction::Path => {
            let path = cmd_config_path::<ReportConfig>(config_path)?;
            if !path.exists() {
                eprintln!(
                    "(file does not exist, run `{} config init` to create it)",
                    ReportConfig::project_name()
                );
            }
            path.display().to_string()
        }
        ConfigAction::Get { key } => cmd_config_get::<ReportConfig>(config_path, &key)?,
        ConfigAction::Set { key, value } => {
            let path = cmd_config_set::<ReportConfig>(config_path, &key, &value)?;
            format!("Set {key} = {value} in {}", path.display())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init::<ReportConfig>(file.as_deref().or(config_path), force)?;
            format!("Config file created at {}", path.display())
        }
        ConfigAction::Export { docker_env } => {
            let config = ReportConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)?
        }
    };
    println!("{output}");
    Ok(())
}

/// Resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<PathBuf> {
    C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

/// Value at a dotted key, formatted for display.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    lookup_key(&tree, key)
        .map(display_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Sets a dotted key in an existing config file; returns the file path.
///
/// A key that holds a string (in the file, or in the defaults when the file
/// omits it) takes `value` verbatim, so `25` stays the string `"25"`. The
/// edited document must still load as `C`, so a value of the wrong type is
/// rejected before anything is written.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<PathBuf> {
    let path = cmd_config_path::<C>(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    let defaults = toml::Value::try_from(C::default()).map_err(|e| Error::config(e.to_string()))?;
    let current = lookup_key(&doc, key).or_else(|| lookup_key(&defaults, key));
    let typed = typed_value(current, value);
    assign_key(&mut doc, key, typed)?;

    let rendered = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<C>(&rendered)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;

    std::fs::write(&path, rendered).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Writes a default config file; returns its path.
pub fn cmd_config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let rendered = C::default().to_toml_string()?;
    std::fs::write(&path, rendered).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Configuration as `KEY=VALUE` lines (or `--env KEY=VALUE` for docker).
pub fn cmd_config_export<C: ConfigManager>(config: &C, docker_env: bool) -> Result<String> {
    let prefix = if docker_env { "--env " } else { "" };
    let lines: Vec<String> = config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{prefix}{key}={value}"))
        .collect();
    Ok(lines.join("\n"))
}

/// Follows a dotted key through nested tables.
pub fn lookup_key<'a>(root: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(root, |node, part| node.as_table()?.get(part))
}

/// Sets the value at a dotted key, creating missing tables on the way.
pub fn assign_key(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut node = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = node
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("Cannot descend into '{part}': not a table")))?;
        node = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = node
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{key}': parent is not a table")))?;
    table.insert(leaf.to_string(), value);
    Ok(())
}

/// Interprets a command-line value as bool, integer, float, or string.
pub fn parse_scalar(raw: &str) -> toml::Value {
    match raw {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => raw
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| raw.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
    }
}

/// Value to store for `raw`, given what the key currently holds.
pub fn typed_value(current: Option<&toml::Value>, raw: &str) -> toml::Value {
    match current {
        Some(toml::Value::String(_)) => toml::Value::String(raw.to_string()),
        _ => parse_scalar(raw),
    }
}

/// Strings print unquoted, sections as a TOML document, anything else inline.
pub fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        toml::Value::Table(section) => section.to_string(),
        other => other.to_string(),
    }
}
