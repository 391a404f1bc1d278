use crate::error::{Result, ScoreError};
use crate::types::config::ScorerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "jgj59.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/jgj59/config.toml";

/// Global config overlaid by `jgj59.toml` next to the sheet.
pub fn load_config(sheet_dir: &Path) -> Result<ScorerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(sheet_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    sheet_dir: &Path,
    global_path: Option<&Path>,
) -> Result<ScorerConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &sheet_dir.join(DEFAULT_CONFIG_FILE))?;

    let cfg: ScorerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "loading config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.project_name().is_none());
        assert!(cfg.report_format().is_none());
    }

    #[test]
    fn load_config_overlays_sheet_dir_on_global() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[project]
organization = "安徽两淮建设技术中心"
name = "默认项目"

[report]
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[project]
name = "滨湖新区二期"

[report]
format = "md"
"#,
        )
        .expect("sheet config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.project_name(), Some("滨湖新区二期"));
        assert_eq!(cfg.organization(), Some("安徽两淮建设技术中心"));
        assert_eq!(cfg.report_format(), Some(OutputFormat::Md));
    }

    #[test]
    fn load_config_reports_file_on_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[project\nname = 1")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, ScoreError::ConfigParse(ref message) if message.contains(DEFAULT_CONFIG_FILE)));
    }
}
