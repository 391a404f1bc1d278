use crate::error::{Result, ScoreError};
use crate::types::state::EvaluationState;
use std::fs;
use std::path::Path;
use tracing::info;

const SHEET_HEADER: &str = "\
# JGJ59-2011 evaluation sheet.
# active = false marks a category as not applicable.
# Scores range 0-100; check a sub-item to include it in its category average.

";

pub fn load_sheet(path: &Path) -> Result<EvaluationState> {
    if !path.exists() {
        return Err(ScoreError::SheetNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let state: EvaluationState = toml::from_str(&content)
        .map_err(|e| ScoreError::SheetParse(format!("{}: {}", path.display(), e)))?;
    state.validate()?;
    Ok(state)
}

pub fn write_sheet(path: &Path, state: &EvaluationState, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(ScoreError::SheetExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let body = toml::to_string_pretty(state)?;
    fs::write(path, format!("{SHEET_HEADER}{body}"))?;
    info!(path = %path.display(), "sheet written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::list_categories;
    use crate::types::state::reset;
    use tempfile::TempDir;

    #[test]
    fn written_fresh_sheet_loads_back_unchanged() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("nested/site.toml");
        let state = reset(list_categories());

        write_sheet(&path, &state, false).expect("sheet should write");
        let loaded = load_sheet(&path).expect("sheet should load");
        assert_eq!(loaded, state);
    }

    #[test]
    fn write_sheet_refuses_to_overwrite_without_flag() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("site.toml");
        fs::write(&path, "").expect("placeholder should write");

        let err = write_sheet(&path, &reset(list_categories()), false)
            .expect_err("overwrite should be refused");
        assert!(matches!(err, ScoreError::SheetExists(_)));
        assert!(write_sheet(&path, &reset(list_categories()), true).is_ok());
    }

    #[test]
    fn load_sheet_reports_missing_and_malformed_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_sheet(&missing),
            Err(ScoreError::SheetNotFound(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[categories.manage\nscore = 1").expect("sheet should write");
        assert!(matches!(load_sheet(&broken), Err(ScoreError::SheetParse(_))));

        let unknown = dir.path().join("unknown.toml");
        fs::write(&unknown, "[categories.tunnel]\nscore = \"80\"\n").expect("sheet should write");
        assert!(matches!(
            load_sheet(&unknown),
            Err(ScoreError::UnknownCategory(_))
        ));
    }
}
