//! Assembly context shared by the group builders
//!
//! The context carries everything a builder may read while emitting
//! fragments: the normalized options of every group, what was detected in
//! the host project, and the probe used to verify plugin requirements.

use crate::options::{GroupName, ResolvedOptions};
use std::sync::Arc;
use tatami_core::{PackageProbe, PluginHandle, Result, TatamiError};

/// Packages that drive detection-based group defaults
const TS_MARKERS: &[&str] = &["typescript", "typescript-eslint"];
const REACT_MARKERS: &[&str] = &[
    "react",
    "@eslint-react/eslint-plugin",
    "eslint-plugin-react-hooks",
];
const SVELTE_MARKERS: &[&str] = &["svelte", "eslint-plugin-svelte"];
const PRETTIER_MARKERS: &[&str] = &["prettier"];
const VITEST_MARKERS: &[&str] = &["vitest"];

/// Which optional tools the host project was found to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectedPackages {
    pub ts: bool,
    pub react: bool,
    pub svelte: bool,
    pub prettier: bool,
    pub vitest: bool,
}

impl DetectedPackages {
    /// Probe the host project once for every detection marker
    pub fn scan(probe: &PackageProbe) -> Self {
        let detected = Self {
            ts: probe.any_installed(TS_MARKERS),
            react: probe.any_installed(REACT_MARKERS),
            svelte: probe.any_installed(SVELTE_MARKERS),
            prettier: probe.any_installed(PRETTIER_MARKERS),
            vitest: probe.any_installed(VITEST_MARKERS),
        };
        tracing::debug!(?detected, root = %probe.root().display(), "scanned host project");
        detected
    }

    /// The default enabled state of a group before user options apply
    pub fn default_enabled(&self, group: GroupName, enable_all_groups: bool) -> bool {
        if enable_all_groups {
            return true;
        }
        match group {
            GroupName::Ignores
            | GroupName::Js
            | GroupName::Imports
            | GroupName::Node
            | GroupName::Jsdoc
            | GroupName::Regexp
            | GroupName::Perfectionist
            | GroupName::Stylistic
            | GroupName::Test
            | GroupName::Disables => true,
            GroupName::Json | GroupName::Jsx => false,
            GroupName::Ts => self.ts,
            GroupName::React => self.react,
            GroupName::Svelte => self.svelte,
            GroupName::Prettier => self.prettier,
        }
    }
}

/// Read-only state handed to every group builder and finalize hook
#[derive(Debug, Clone)]
pub struct AssemblyContext {
    pub enable_all_groups: bool,
    /// An external formatter (Prettier) owns formatting; stylistic groups
    /// must not emit layout rules
    pub external_formatter: bool,
    pub options: Arc<ResolvedOptions>,
    pub detected: DetectedPackages,
    probe: PackageProbe,
}

impl AssemblyContext {
    pub(crate) fn new(
        options: ResolvedOptions,
        detected: DetectedPackages,
        probe: PackageProbe,
    ) -> Self {
        Self {
            enable_all_groups: options.enable_all_groups,
            external_formatter: options.prettier.enabled,
            options: Arc::new(options),
            detected,
            probe,
        }
    }

    pub fn probe(&self) -> &PackageProbe {
        &self.probe
    }

    /// Resolve a plugin and verify its host requirements are met
    ///
    /// Missing registrations and unmet requirements both abort the assembly;
    /// a disabled group never reaches this point.
    pub fn load_plugin(&self, name: &str) -> Result<&'static PluginHandle> {
        let handle = crate::plugins::load(name)?;
        for package in handle.requires {
            if !self.probe.is_installed(package) {
                return Err(TatamiError::plugin_load(
                    name,
                    format!("required package `{package}` is not installed"),
                ));
            }
        }
        tracing::trace!(plugin = name, "loaded plugin");
        Ok(handle)
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> AssemblyContext {
    test_context_in(crate::options::ConfigOptions::default(), std::path::Path::new("."))
}

#[cfg(test)]
pub(crate) fn test_context_in(
    options: crate::options::ConfigOptions,
    root: &std::path::Path,
) -> AssemblyContext {
    let probe = PackageProbe::new(root);
    let detected = DetectedPackages::scan(&probe);
    let mut resolved = ResolvedOptions::resolve(options, &detected);
    resolved.js.enabled = true;
    AssemblyContext::new(resolved, detected, probe)
}

#[cfg(test)]
pub(crate) fn install_test_package(root: &std::path::Path, package: &str) {
    let mut dir = root.join("node_modules");
    for part in package.split('/') {
        dir.push(part);
    }
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("package.json"), "{}").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scan_reports_installed_markers() {
        let temp = TempDir::new().unwrap();
        install_test_package(temp.path(), "typescript");
        install_test_package(temp.path(), "vitest");

        let detected = DetectedPackages::scan(&PackageProbe::new(temp.path()));
        assert!(detected.ts);
        assert!(detected.vitest);
        assert!(!detected.react);
    }

    #[test]
    fn any_marker_is_enough() {
        let temp = TempDir::new().unwrap();
        install_test_package(temp.path(), "eslint-plugin-svelte");

        let detected = DetectedPackages::scan(&PackageProbe::new(temp.path()));
        assert!(detected.svelte);
    }

    #[test]
    fn enable_all_groups_overrides_detection_defaults() {
        let detected = DetectedPackages::default();
        assert!(!detected.default_enabled(GroupName::Ts, false));
        assert!(detected.default_enabled(GroupName::Ts, true));
        assert!(detected.default_enabled(GroupName::Json, true));
    }

    #[test]
    fn context_derives_external_formatter_from_prettier() {
        let temp = TempDir::new().unwrap();
        install_test_package(temp.path(), "prettier");

        let ctx = test_context_in(crate::options::ConfigOptions::default(), temp.path());
        assert!(ctx.external_formatter);
        assert!(ctx.options.prettier.enabled);
    }

    #[test]
    fn load_plugin_fails_on_missing_requirement() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context_in(crate::options::ConfigOptions::default(), temp.path());

        // typescript-eslint needs the typescript package on the host
        let err = ctx.load_plugin("@typescript-eslint").unwrap_err();
        assert!(err.to_string().contains("typescript"));

        install_test_package(temp.path(), "typescript");
        assert!(ctx.load_plugin("@typescript-eslint").is_ok());
    }

    #[test]
    fn load_plugin_fails_on_unknown_name() {
        let ctx = test_context();
        assert!(ctx.load_plugin("does-not-exist").is_err());
    }
}
