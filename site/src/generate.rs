//! Writing the rendered site to disk.
//!
//! This is the build step the original host framework performed: render the
//! homepage once, write it as `index.html`, and copy the `static/` asset
//! tree (the card illustrations) beside it so the relative URLs in the
//! markup resolve.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::render_home;

/// What went wrong while writing the site.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Output (or asset destination) directory could not be created.
    #[error("failed to create directory {path}")]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The rendered page could not be written.
    #[error("failed to write {path}")]
    WritePage {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A static asset could not be copied into the output tree.
    #[error("failed to copy asset {path}")]
    CopyAsset {
        /// Source file being copied.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The static asset directory could not be walked.
    #[error("failed to read static directory {path}")]
    WalkStatic {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },
}

/// What a build produced.
#[derive(Clone, Debug, Serialize)]
pub struct BuildSummary {
    /// Directory the site was written into.
    pub out_dir: PathBuf,
    /// Pages written, as paths relative to `out_dir`.
    pub pages: Vec<String>,
    /// Size of the rendered HTML in bytes.
    pub html_bytes: usize,
    /// Number of static files copied into the output tree.
    pub assets_copied: usize,
}

/// Render the homepage and write the deployable site into `out_dir`.
///
/// `static_dir` is the asset tree copied verbatim into the output
/// (preserving relative paths); pass `None`, or a path that is not a
/// directory, to skip the copy. The output directory is created if needed
/// and existing files are overwritten, so rebuilding into the same
/// directory is idempotent.
pub fn build_site(out_dir: &Path, static_dir: Option<&Path>) -> Result<BuildSummary, BuildError> {
    fs::create_dir_all(out_dir).map_err(|source| BuildError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_home();
    let index = out_dir.join("index.html");
    fs::write(&index, &html).map_err(|source| BuildError::WritePage {
        path: index.clone(),
        source,
    })?;
    debug!("wrote {} ({} bytes)", index.display(), html.len());

    let mut assets_copied = 0;
    if let Some(static_dir) = static_dir.filter(|dir| dir.is_dir()) {
        for entry in WalkDir::new(static_dir) {
            let entry = entry.map_err(|source| BuildError::WalkStatic {
                path: static_dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(static_dir).unwrap_or(entry.path());
            let dest = out_dir.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(entry.path(), &dest).map_err(|source| BuildError::CopyAsset {
                path: entry.path().to_path_buf(),
                source,
            })?;
            debug!("copied {}", rel.display());
            assets_copied += 1;
        }
    } else {
        debug!("no static directory, skipping asset copy");
    }

    info!(
        "site written to {} ({} assets)",
        out_dir.display(),
        assets_copied
    );

    Ok(BuildSummary {
        out_dir: out_dir.to_path_buf(),
        pages: vec!["index.html".into()],
        html_bytes: html.len(),
        assets_copied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_index_html() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let out = tmp.path().join("dist");

        let summary = build_site(&out, None).expect("build");

        let html = fs::read_to_string(out.join("index.html")).expect("read index.html");
        assert!(html.contains("Domainify"));
        assert_eq!(summary.pages, vec!["index.html".to_string()]);
        assert_eq!(summary.html_bytes, html.len());
        assert_eq!(summary.assets_copied, 0);
    }

    #[test]
    fn copies_static_tree_preserving_paths() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let static_dir = tmp.path().join("static");
        fs::create_dir_all(static_dir.join("img")).expect("static img dir");
        fs::write(static_dir.join("img/easy-to-use.svg"), "<svg></svg>").expect("write asset");

        let out = tmp.path().join("dist");
        let summary = build_site(&out, Some(&static_dir)).expect("build");

        assert_eq!(summary.assets_copied, 1);
        assert!(out.join("img/easy-to-use.svg").is_file());
    }

    #[test]
    fn missing_static_dir_is_not_an_error() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let out = tmp.path().join("dist");

        let summary = build_site(&out, Some(&tmp.path().join("nope"))).expect("build");

        assert_eq!(summary.assets_copied, 0);
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn failed_directory_creation_reports_the_path() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");

        let err = build_site(&blocker.join("dist"), None).expect_err("build should fail");

        let msg = err.to_string();
        assert!(msg.contains("failed to create directory"));
        assert!(msg.contains("blocker"));
    }

    #[test]
    fn rebuild_into_same_directory_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let out = tmp.path().join("dist");

        build_site(&out, None).expect("first build");
        let first = fs::read_to_string(out.join("index.html")).expect("read first");
        build_site(&out, None).expect("second build");
        let second = fs::read_to_string(out.join("index.html")).expect("read second");

        assert_eq!(first, second);
    }
}
