use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum BundleError {
    MissingSource(String),
    Io(std::io::Error),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::MissingSource(path) => write!(f, "Missing input CSS: {path}"),
            BundleError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for BundleError {}

impl From<std::io::Error> for BundleError {
    fn from(err: std::io::Error) -> Self {
        BundleError::Io(err)
    }
}

/// Copy the compiled stylesheet verbatim into the destination file,
/// creating destination directories as needed. Returns the number of
/// bytes written. A missing source fails before anything is written.
pub fn bundle(src: &Path, dst: &Path) -> Result<usize, BundleError> {
    if !src.exists() {
        return Err(BundleError::MissingSource(src.display().to_string()));
    }

    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let css = fs::read_to_string(src)?;
    fs::write(dst, &css)?;

    Ok(css.len())
}
