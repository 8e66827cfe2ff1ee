//! The Manifest Reconciler
//!
//! Merges a configured manifest spec into its canonical form and writes it
//! to every target location, honoring an overwrite policy. Validation and
//! serialization failures abort before any I/O; per-target write failures
//! are recorded and do not stop the remaining targets, since each location
//! serves an independent consumer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::MANIFEST_FILE_NAME;
use crate::error::{Error, Result};
use crate::io;
use crate::manifest::ManifestSpec;

/// One filesystem location where the manifest must be materialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriteTarget {
    path: PathBuf,
}

impl WriteTarget {
    /// Target a `manifest.json` inside the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(MANIFEST_FILE_NAME),
        }
    }

    /// The standard pair: the web-servable public root and the application
    /// base root, in that order.
    pub fn standard_pair(public_root: &Path, base_root: &Path) -> Vec<Self> {
        vec![Self::in_dir(public_root), Self::in_dir(base_root)]
    }

    /// Full path of the target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl std::fmt::Display for WriteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Outcome of one target's write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// The manifest was (re)written at this target.
    Written,
    /// The target already existed and `force` was off; content untouched.
    SkippedExists,
    /// The write failed; the target was left as it was.
    Failed { reason: String },
}

impl WriteResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A target paired with its write outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: WriteTarget,
    pub result: WriteResult,
}

/// Per-target outcomes of one reconcile call, in target order.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    outcomes: Vec<TargetOutcome>,
}

impl ReconcileReport {
    /// True when no target failed; skipped targets count as success.
    pub fn success(&self) -> bool {
        !self.outcomes.iter().any(|o| o.result.is_failed())
    }

    pub fn outcomes(&self) -> &[TargetOutcome] {
        &self.outcomes
    }

    /// Result for a specific target, if it was part of this run.
    pub fn result_for(&self, target: &WriteTarget) -> Option<&WriteResult> {
        self.outcomes
            .iter()
            .find(|o| &o.target == target)
            .map(|o| &o.result)
    }

    fn record(&mut self, target: WriteTarget, result: WriteResult) {
        self.outcomes.push(TargetOutcome { target, result });
    }
}

/// Reconcile the manifest spec onto every target path.
///
/// Fails fast with [`Error::EmptyManifest`], [`Error::MissingIcons`], or
/// [`Error::Serialization`] before touching the filesystem. Per-target
/// filesystem problems never produce an `Err`; they are recorded as
/// [`WriteResult::Failed`] and the remaining targets are still attempted.
/// With `force` off, an existing target file is left untouched and
/// reported as [`WriteResult::SkippedExists`].
pub fn reconcile(
    spec: &ManifestSpec,
    targets: &[WriteTarget],
    force: bool,
) -> Result<ReconcileReport> {
    if spec.is_empty() {
        return Err(Error::EmptyManifest);
    }
    if !spec.has_icons() {
        return Err(Error::MissingIcons);
    }

    let encoded = spec.canonicalize().to_json()?;

    let mut report = ReconcileReport::default();
    for target in targets {
        let result = write_target(target, encoded.as_bytes(), force);
        debug!(path = %target, ?result, "reconciled target");
        report.record(target.clone(), result);
    }

    Ok(report)
}

fn write_target(target: &WriteTarget, content: &[u8], force: bool) -> WriteResult {
    let Some(parent) = target.path().parent() else {
        return WriteResult::Failed {
            reason: "target has no parent directory".to_string(),
        };
    };

    // Fast-fail probe only; the atomic rename below is what actually
    // guarantees consistency.
    if !io::dir_writable(parent) {
        return WriteResult::Failed {
            reason: format!("directory not writable: {}", parent.display()),
        };
    }

    if target.exists() && !force {
        return WriteResult::SkippedExists;
    }

    match io::write_atomic(target.path(), content) {
        Ok(()) => WriteResult::Written,
        Err(e) => WriteResult::Failed {
            reason: e.to_string(),
        },
    }
}
