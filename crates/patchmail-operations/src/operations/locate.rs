use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use patchmail_core::PatchSet;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;

/// File name pattern a patch must match when scanning a directory.
pub const PATCH_GLOB: &str = "*.patch";
const PATCH_EXTENSION: &str = "patch";

pub struct LocateOperation {
    matcher: GlobMatcher,
}

impl LocateOperation {
    /// # Errors
    ///
    /// Returns an error if the patch pattern cannot be compiled.
    pub fn new() -> Result<Self> {
        let matcher = GlobBuilder::new(PATCH_GLOB)
            .literal_separator(true)
            .build()
            .map_err(|source| OperationError::GlobPattern {
                pattern: PATCH_GLOB.to_string(),
                source,
            })?
            .compile_matcher();

        Ok(Self { matcher })
    }

    /// Turns the operator's patch argument into a [`PatchSet`].
    ///
    /// A directory is searched recursively for `*.patch` files; a file must
    /// itself carry the `.patch` extension.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist, is a file with the wrong
    /// extension, or is a directory without any patches.
    pub fn execute(&self, path: &Path) -> Result<PatchSet> {
        if path.is_dir() {
            let mut patches = Vec::new();
            self.collect_patches(path, &mut patches)?;
            patches.sort();

            debug!(dir = %path.display(), count = patches.len(), "found patches");

            if patches.is_empty() {
                return Err(OperationError::NoPatchesFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(PatchSet::new(path, patches)?);
        }

        if !path.exists() {
            return Err(OperationError::PatchNotFound {
                path: path.to_path_buf(),
            });
        }

        if path.extension().is_some_and(|ext| ext == PATCH_EXTENSION) {
            Ok(PatchSet::single(path))
        } else {
            Err(OperationError::InvalidPatchExtension {
                path: path.to_path_buf(),
            })
        }
    }

    fn collect_patches(&self, dir: &Path, results: &mut Vec<PathBuf>) -> Result<()> {
        let scan_error = |source: std::io::Error| OperationError::PatchScan {
            path: dir.to_path_buf(),
            source,
        };

        for entry in std::fs::read_dir(dir).map_err(scan_error)? {
            let entry = entry.map_err(scan_error)?;
            let file_type = entry.file_type().map_err(scan_error)?;
            let path = entry.path();

            // Symlinked directories are not descended into, and only entries
            // resolving to regular files count as patches.
            if file_type.is_dir() {
                self.collect_patches(&path, results)?;
            } else if path.is_file() && self.matcher.is_match(entry.file_name()) {
                results.push(path);
            }
        }

        Ok(())
    }
}
