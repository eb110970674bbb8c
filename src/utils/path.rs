//! Path utilities: expand ~, read the raw input text from a file or stdin.

use crate::errors::AppResult;
use std::io::{self, Read};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Read the whole input: `None` or `-` means stdin.
pub fn read_input(path: Option<&str>) -> AppResult<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(p) => Ok(std::fs::read_to_string(expand_tilde(p))?),
    }
}
