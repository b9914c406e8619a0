use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, sorted
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            content_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            log::debug!("Found markdown file: {}", path.display());
            files.push(path);
        }
    }

    Ok(())
}

/// Maps `content_root/a/b.md` to `public_root/a/b.html`.
pub fn html_output_path(
    content_root: &Path,
    source: &Path,
    public_root: &Path,
) -> Result<PathBuf, IoError> {
    let relative = source.strip_prefix(content_root).map_err(|_| {
        IoError::InvalidContentDir(format!(
            "{} is not inside {}",
            source.display(),
            content_root.display()
        ))
    })?;
    let relative = RelativePathBuf::from_path(relative)
        .map_err(|e| IoError::InvalidContentDir(format!("{}: {e}", relative.display())))?;
    Ok(relative.with_extension("html").to_path(public_root))
}

/// Replace `destination` with a recursive copy of `source`.
///
/// Anything already in `destination` is removed first. Returns the number of
/// files copied.
pub fn copy_directory(source: &Path, destination: &Path) -> Result<usize, IoError> {
    if !source.is_dir() {
        return Err(IoError::NotFound(source.to_path_buf()));
    }

    reset_directory(destination)?;
    copy_directory_recursive(source, destination)
}

/// Leaves `path` as an empty directory, removing whatever was there.
pub fn reset_directory(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        log::info!("Cleaning destination directory: {}", path.display());
        fs::remove_dir_all(path).map_err(IoError::Io)?;
    }
    fs::create_dir_all(path).map_err(IoError::Io)
}

fn copy_directory_recursive(source: &Path, destination: &Path) -> Result<usize, IoError> {
    let mut copied = 0;

    for entry in fs::read_dir(source).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let src_path = entry.path();
        let dest_path = destination.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dest_path).map_err(IoError::Io)?;
            log::info!("Created directory: {}", dest_path.display());
            copied += copy_directory_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(IoError::Io)?;
            log::info!("Copied file: {}", dest_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}
