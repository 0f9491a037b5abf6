use std::fs;
use std::path::Path;
use crate::core::error::{Error, ErrorKind, Result};

/// Immediate subdirectories of `root` without a leading dot, sorted
pub fn list_country_dirs(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(Error::new(ErrorKind::NotFound, format!("no such directory: {}", root.display())));
    }

    let mut countries = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            countries.push(name);
        }
    }
    countries.sort();
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_visible_directories_only() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Italy")).unwrap();
        fs::create_dir(tmp.path().join("Chile")).unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let countries = list_country_dirs(tmp.path()).unwrap();

        assert_eq!(countries, vec!["Chile".to_string(), "Italy".to_string()]);
    }

    #[test]
    fn missing_root_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("plain.txt"), "x").unwrap();

        let missing = list_country_dirs(&tmp.path().join("Atlantis")).unwrap_err();
        let file = list_country_dirs(&tmp.path().join("plain.txt")).unwrap_err();

        assert_eq!(missing.kind, ErrorKind::NotFound);
        assert_eq!(file.kind, ErrorKind::NotFound);
    }
}
