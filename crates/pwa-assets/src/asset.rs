//! Context-dependent asset URL resolution
//!
//! Deployments differ in which directory serves static files: some expose
//! `public/` as the document root, others serve from the application root
//! and reach assets through a `public/` URL prefix. The resolver folds
//! that difference into one place.

use std::path::PathBuf;

use pwa_core::ProcessingDirectory;

/// Resolves relative asset paths to full URLs for the active deployment.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
    processing_directory: ProcessingDirectory,
    local_request: bool,
    public_root: Option<PathBuf>,
}

impl AssetResolver {
    /// Create a resolver for the given site base URL.
    pub fn new(base_url: impl Into<String>, processing_directory: ProcessingDirectory) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            processing_directory,
            local_request: false,
            public_root: None,
        }
    }

    /// Mark the request context as local (loopback), which skips the
    /// `public/` URL prefix in root-served deployments.
    pub fn with_local_request(mut self, local: bool) -> Self {
        self.local_request = local;
        self
    }

    /// Public directory on disk, used to probe which kit asset copy exists.
    pub fn with_public_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.public_root = Some(path.into());
        self
    }

    /// Resolve a relative asset path to a full URL.
    ///
    /// Absolute `http(s)` inputs pass through untouched.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }

        let relative = match self.processing_directory {
            ProcessingDirectory::Public => {
                // public/ already is the document root; drop one prefix
                path.strip_prefix("public/").unwrap_or(path)
            }
            ProcessingDirectory::Root => {
                if self.local_request || path.starts_with("public/") {
                    path
                } else {
                    return format!("{}/public/{}", self.base_url, path.trim_start_matches('/'));
                }
            }
        };

        format!("{}/{}", self.base_url, relative.trim_start_matches('/'))
    }

    /// URL of the kit stylesheet, preferring the published package copy
    /// when it exists under the public root.
    pub fn kit_stylesheet(&self) -> String {
        self.kit_asset(crate::KIT_CSS_PACKAGE_PATH, crate::KIT_CSS_VENDOR_PATH)
    }

    /// URL of the kit script, preferring the published package copy.
    pub fn kit_script(&self) -> String {
        self.kit_asset(crate::KIT_JS_PACKAGE_PATH, crate::KIT_JS_VENDOR_PATH)
    }

    fn kit_asset(&self, package_path: &str, vendor_path: &str) -> String {
        let published = self
            .public_root
            .as_ref()
            .is_some_and(|root| root.join(package_path).is_file());
        if published {
            self.resolve(package_path)
        } else {
            self.resolve(vendor_path)
        }
    }
}
