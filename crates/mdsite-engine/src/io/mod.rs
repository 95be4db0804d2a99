use crate::page::{RenderError, render_page};
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
    #[error("Path {path} is not relative to the content root: {reason}")]
    InvalidPath { path: PathBuf, reason: String },
    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Read a file, distinguishing a missing file from other IO failures
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

/// Scan for markdown files under the content root, sorted
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

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
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Render one markdown file through the template and write it to `dest`
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read_file(from)?;
    let template = read_file(template_path)?;
    let page = render_page(&markdown, &template).map_err(|source| IoError::Render {
        path: from.to_path_buf(),
        source,
    })?;

    write_file(dest, &page)
}

/// Generate a page for every markdown file under `content_root`, mirroring
/// its relative location under `output_root` with an `.html` extension.
///
/// Returns the written paths in sorted order.
pub fn generate_pages_recursive(
    content_root: &Path,
    template_path: &Path,
    output_root: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::new();

    for source in scan_markdown_files(content_root)? {
        let dest = output_path_for(&source, content_root, output_root)?;
        generate_page(&source, template_path, &dest)?;
        written.push(dest);
    }

    Ok(written)
}

/// Map `content_root/a/b.md` to `output_root/a/b.html`
fn output_path_for(
    source: &Path,
    content_root: &Path,
    output_root: &Path,
) -> Result<PathBuf, IoError> {
    let invalid = |reason: String| IoError::InvalidPath {
        path: source.to_path_buf(),
        reason,
    };

    let stripped = source
        .strip_prefix(content_root)
        .map_err(|e| invalid(e.to_string()))?;
    let relative = RelativePathBuf::from_path(stripped).map_err(|e| invalid(e.to_string()))?;

    Ok(relative.with_extension("html").to_path(output_root))
}

/// Replace `dest` with a recursive copy of `src`, returning the file count
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    if dest.exists() {
        log::debug!("Removing existing {}", dest.display());
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }
    copy_directory_recursive(src, dest)
}

fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dest).map_err(IoError::Io)?;
    let mut copied = 0;

    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if path.is_dir() {
            copied += copy_directory_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}
