use std::path::{Path, PathBuf};

use crate::lexer::{Lexer, Line};
use crate::utils::split_statement;
use crate::ConfigError;

/// Expand a leading `~/` to the home directory.
pub(super) fn resolve_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| ConfigError::IoFailure {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}

/// 1-based line of the last declaration of `key` in `scope` (`None` for the
/// root), or 0 when the raw text has no such line.
pub(super) fn find_config_line(scope: Option<&str>, key: &str, raw_content: &str) -> usize {
    let mut lexer = Lexer::new(raw_content);
    let mut current: Option<String> = None;
    let mut found = 0;

    while let Some(line) = lexer.next_line() {
        match line {
            Line::Header(header) => {
                current = header
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .map(str::to_string);
            }
            Line::Statement(statement) => {
                let Some((line_key, _)) = split_statement(&statement) else {
                    continue;
                };
                if line_key == key && current.as_deref() == scope {
                    found = lexer.line();
                }
            }
            Line::Blank | Line::Comment(_) => {}
        }
    }

    found
}
