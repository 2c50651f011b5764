//! Installed-package detection
//!
//! Several groups default to enabled only when the host project actually
//! uses the matching tool. Detection is a filesystem probe for the package's
//! manifest under `node_modules/`, walking up from the project root the same
//! way module resolution would. Probing is best-effort: any I/O problem
//! counts as "not installed" and never fails composition.

use std::path::{Path, PathBuf};

/// Probes a project tree for installed packages
#[derive(Debug, Clone)]
pub struct PackageProbe {
    root: PathBuf,
}

impl PackageProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Probe rooted at the current working directory
    pub fn from_current_dir() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `package` is installed in the project or any ancestor
    pub fn is_installed(&self, package: &str) -> bool {
        for dir in self.root.ancestors() {
            let mut manifest = dir.join("node_modules");
            for part in package.split('/') {
                manifest.push(part);
            }
            manifest.push("package.json");

            if manifest.is_file() {
                tracing::debug!(package, dir = %dir.display(), "detected installed package");
                return true;
            }
        }
        false
    }

    /// Whether any of `packages` is installed
    pub fn any_installed(&self, packages: &[&str]) -> bool {
        packages.iter().any(|package| self.is_installed(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn install_package(root: &Path, package: &str) {
        let mut dir = root.join("node_modules");
        for part in package.split('/') {
            dir.push(part);
        }
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), "{}").unwrap();
    }

    #[test]
    fn finds_installed_packages() {
        let temp = TempDir::new().unwrap();
        install_package(temp.path(), "prettier");

        let probe = PackageProbe::new(temp.path());
        assert!(probe.is_installed("prettier"));
        assert!(!probe.is_installed("typescript"));
    }

    #[test]
    fn finds_scoped_packages() {
        let temp = TempDir::new().unwrap();
        install_package(temp.path(), "@eslint-react/eslint-plugin");

        let probe = PackageProbe::new(temp.path());
        assert!(probe.is_installed("@eslint-react/eslint-plugin"));
    }

    #[test]
    fn walks_up_to_ancestor_installations() {
        let temp = TempDir::new().unwrap();
        install_package(temp.path(), "svelte");

        let nested = temp.path().join("packages").join("app");
        fs::create_dir_all(&nested).unwrap();

        let probe = PackageProbe::new(&nested);
        assert!(probe.is_installed("svelte"));
    }

    #[test]
    fn any_installed_matches_any_marker() {
        let temp = TempDir::new().unwrap();
        install_package(temp.path(), "typescript-eslint");

        let probe = PackageProbe::new(temp.path());
        assert!(probe.any_installed(&["typescript", "typescript-eslint"]));
        assert!(!probe.any_installed(&["react", "svelte"]));
    }
}
