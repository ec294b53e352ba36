use crate::render::render_html;
use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
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
    #[error("Path is not inside the content directory: {0}")]
    OutsideRoot(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// `posts/launch.md` -> `posts/launch.html`
pub fn html_path_for(relative_path: &RelativePath) -> RelativePathBuf {
    relative_path.with_extension("html")
}

/// Render every markdown file under `content_root` into `output_root`.
///
/// The directory layout is mirrored. Returns the relative paths of the
/// written HTML files, sorted.
pub fn render_tree(content_root: &Path, output_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let mut written = Vec::new();

    for path in scan_markdown_files(content_root)? {
        let relative = relative_to(&path, content_root)?;
        let content = read_file(&relative, content_root)?;
        let target = html_path_for(&relative);

        debug!("rendering {relative} -> {target}");
        write_file(&target, output_root, &render_html(&content))?;
        written.push(target);
    }

    Ok(written)
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| IoError::OutsideRoot(path.to_path_buf()))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_content_dir, create_test_file};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_and_load_files() {
        // Given a content directory with markdown files
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "launch.md", "# Launch\n\nTry it on.");
        create_test_file(&content_dir, "tips.md", "- Veil\n- Gloves");

        // When scanning for files
        let files = scan_markdown_files(content_dir.path()).unwrap();

        // Then we find the expected files, sorted
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "launch.md");
        assert_eq!(files[1].file_name().unwrap(), "tips.md");
    }

    #[test]
    fn test_handle_invalid_content_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(matches!(result, Err(IoError::InvalidContentDir(_))));
        assert!(result.unwrap_err().to_string().contains("content directory"));
    }

    #[test]
    fn test_scan_nested_directories_ignoring_other_files() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "root.md", "# Root");
        create_test_file(&content_dir, "cover.png", "fake image data");
        create_test_file(&content_dir, "posts/nested.md", "# Nested");

        let files = scan_markdown_files(content_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "root.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.md"));
    }

    #[test]
    fn test_validate_content_dir_rejects_files() {
        let content_dir = create_test_content_dir();
        let file = create_test_file(&content_dir, "post.md", "x");
        assert!(validate_content_dir(content_dir.path()).is_ok());
        assert!(matches!(
            validate_content_dir(&file),
            Err(IoError::InvalidContentDir(_))
        ));
    }

    #[test]
    fn test_read_file_not_found() {
        let content_dir = create_test_content_dir();
        let result = read_file(RelativePath::new("missing.md"), content_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let out_dir = create_test_content_dir();
        let relative_path = RelativePath::new("blog/2024/post.html");

        write_file(relative_path, out_dir.path(), "<p>hi</p>").unwrap();

        let written = read_file(relative_path, out_dir.path()).unwrap();
        assert_eq!(written, "<p>hi</p>");
        assert!(out_dir.path().join("blog").join("2024").is_dir());
    }

    #[test]
    fn test_html_path_for() {
        assert_eq!(
            html_path_for(RelativePath::new("posts/launch.md")),
            RelativePathBuf::from("posts/launch.html")
        );
    }

    #[test]
    fn test_render_tree_mirrors_layout() {
        let content_dir = create_test_content_dir();
        let out_dir = create_test_content_dir();
        create_test_file(&content_dir, "index.md", "**Bem-vinda!**");
        create_test_file(&content_dir, "posts/veils.md", "## Veils\n- Lace\n- Tulle");

        let written = render_tree(content_dir.path(), out_dir.path()).unwrap();

        assert_eq!(
            written,
            vec![
                RelativePathBuf::from("index.html"),
                RelativePathBuf::from("posts/veils.html"),
            ]
        );
        assert_eq!(
            read_file(RelativePath::new("index.html"), out_dir.path()).unwrap(),
            r#"<p class="mb-4"><strong class="font-bold">Bem-vinda!</strong></p>"#
        );
        assert_eq!(
            read_file(RelativePath::new("posts/veils.html"), out_dir.path()).unwrap(),
            "<h2 id=\"veils\" class=\"text-3xl font-bold\">Veils</h2>\n\
             <ul class=\"list-disc pl-6 mb-4\">\n<li>Lace</li>\n<li>Tulle</li>\n</ul>"
        );
    }
}
