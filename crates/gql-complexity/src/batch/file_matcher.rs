use crate::batch::BatchError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, BatchError>;

const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_leading_dot: false,
    require_literal_separator: true,
};

/// Finds the files under a root directory whose root-relative path matches a
/// glob pattern.
#[derive(Clone, Debug)]
pub struct FileMatcher {
    max_depth: Option<usize>,
    pattern: glob::Pattern,
    root: PathBuf,
}
impl FileMatcher {
    pub fn new(root: impl AsRef<Path>, pattern: &str) -> Result<Self> {
        let glob_pattern = glob::Pattern::new(pattern).map_err(
            |err| BatchError::InvalidPattern {
                err,
                pattern: pattern.to_string(),
            },
        )?;

        // Without `**` a match can be no deeper than the pattern itself.
        let max_depth = if pattern.contains("**") {
            None
        } else {
            Some(pattern.split('/').filter(|part| !part.is_empty()).count())
        };

        Ok(Self {
            max_depth,
            pattern: glob_pattern,
            root: root.as_ref().to_path_buf(),
        })
    }

    pub fn matches(&self, relative_path: &Path) -> bool {
        self.pattern.matches_path_with(relative_path, MATCH_OPTIONS)
    }

    /// Every matching file, as a path relative to the root, in sorted order.
    pub fn matching_files(&self) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let mut file_paths = vec![];
        for entry in walker {
            let entry = entry.map_err(|err| BatchError::DirectoryWalkError {
                err,
                root: self.root.clone(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative_path) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if self.matches(relative_path) {
                tracing::trace!(path = %relative_path.display(), "matched file");
                file_paths.push(relative_path.to_path_buf());
            }
        }

        file_paths.sort();
        Ok(file_paths)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }
}
