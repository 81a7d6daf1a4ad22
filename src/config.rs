use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{GcodeError, GcodeResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Longest accepted line in bytes, terminator excluded.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Skip lines with neither codes nor a comment.
    #[serde(default)]
    pub skip_empty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            skip_empty: false,
        }
    }
}

impl ParserConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GcodeResult<Self> {
        let file = File::open(path)
            .map_err(|e| GcodeError::config(format!("Failed to open config file: {}", e)))?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| GcodeError::config(format!("Failed to parse config file: {}", e)))?;
        config.validate()
    }

    pub fn from_json(s: &str) -> GcodeResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| GcodeError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    fn validate(self) -> GcodeResult<Self> {
        if self.max_line_length == 0 {
            return Err(GcodeError::config("max_line_length must be positive"));
        }
        Ok(self)
    }
}

fn default_max_line_length() -> usize {
    64 * 1024
}
