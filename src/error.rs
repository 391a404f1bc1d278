use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid input in {count} field(s), check number format: {}", .fields.join(", "))]
    InvalidInput { count: usize, fields: Vec<String> },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown sub-item '{item}' in category {category}")]
    UnknownSubItem { category: String, item: String },

    #[error("category kind mismatch: {0}")]
    KindMismatch(String),

    #[error("malformed edit: {0}")]
    MalformedEdit(String),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("sheet already exists: {0} (use --force to overwrite)")]
    SheetExists(String),

    #[error("sheet parse error: {0}")]
    SheetParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    pub fn invalid_input(fields: Vec<String>) -> Self {
        Self::InvalidInput {
            count: fields.len(),
            fields,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
