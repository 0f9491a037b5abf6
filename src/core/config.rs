use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};
use crate::ingest::decode::TextEncoding;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub file_extension: String,
    /// Tried in order until one decodes a whole file
    pub encodings: Vec<TextEncoding>,
    pub min_segments: usize,

    // Age filter bounds used when only one side is supplied
    pub default_min_age: i64,
    pub default_max_age: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_extension: ".txt".to_string(),
            encodings: vec![
                TextEncoding::Utf8,
                TextEncoding::Latin1,
                TextEncoding::Windows1252,
                TextEncoding::Utf16,
            ],
            min_segments: 4,
            default_min_age: 0,
            default_max_age: 150,
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.encodings.is_empty() {
            return Err(Error::invalid_input("config lists no encodings"));
        }
        if self.min_segments == 0 {
            return Err(Error::invalid_input("min_segments must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"file_extension": ".dat", "encodings": ["utf-8", "utf-16"]}}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();

        assert_eq!(config.file_extension, ".dat");
        assert_eq!(config.encodings, vec![TextEncoding::Utf8, TextEncoding::Utf16]);
        assert_eq!(config.min_segments, 4);
        assert_eq!(config.default_max_age, 150);
    }

    #[test]
    fn empty_encoding_list_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"encodings": []}}"#).unwrap();

        let err = Config::from_json_file(file.path()).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidInput);
    }
}
