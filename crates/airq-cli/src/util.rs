//! Utility functions for CLI operations.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Write output to file or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("aqi.json");

        write_output(Some(&path), "{\"index\":69}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"index\":69}\n");
    }

    #[test]
    fn test_write_output_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("aqi.json");

        let err = write_output(Some(&path), "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
