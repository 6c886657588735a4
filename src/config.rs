//! Settings file support.
//!
//! A config file is plain TOML, every key optional:
//!
//! ```toml
//! tape_size = 30000
//! indent = "tab"      # or a number of spaces, e.g. "4"
//! strict = false
//! output = "output.c"
//! ```
//!
//! Command line flags override the file, the file overrides the defaults.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::codegen::{Indent, TranslateOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tape_size: Option<usize>,
    pub indent: Option<Indent>,
    pub strict: Option<bool>,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid config '{}': {}", path.display(), message.trim_end())
            }
            ConfigError::Invalid(msg) => write!(f, "invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Layer `other` on top of `self`; set values in `other` win.
    pub fn overridden_by(self, other: Config) -> Config {
        Config {
            tape_size: other.tape_size.or(self.tape_size),
            indent: other.indent.or(self.indent),
            strict: other.strict.or(self.strict),
            output: other.output.or(self.output),
        }
    }

    pub fn translate_options(&self) -> Result<TranslateOptions, ConfigError> {
        let defaults = TranslateOptions::default();
        let tape_size = self.tape_size.unwrap_or(defaults.tape_size);
        if tape_size == 0 {
            return Err(ConfigError::Invalid(
                "tape_size must be at least 1 cell".to_string(),
            ));
        }
        Ok(TranslateOptions {
            tape_size,
            indent: self.indent.unwrap_or(defaults.indent),
            strict: self.strict.unwrap_or(defaults.strict),
        })
    }
}
