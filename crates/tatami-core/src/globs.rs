//! Glob patterns shared by the group builders
//!
//! Patterns use the lint engine's extglob syntax: `?([cm])[jt]s?(x)` matches
//! the `js` / `mjs` / `cjs` / `ts` / `jsx` / ... source extensions. These are
//! opaque strings to the composer; they are only matched by the engine.

/// Source-file extension pattern shared by the compound globs
pub const SRC_EXT: &str = "?([cm])[jt]s?(x)";

/// Every JavaScript/TypeScript source file
pub const SRC: &str = "**/*.?([cm])[jt]s?(x)";

pub const JS: &str = "**/*.?([cm])js";
pub const JSX: &str = "**/*.?([cm])jsx";
pub const TS: &str = "**/*.?([cm])ts";
pub const TSX: &str = "**/*.?([cm])tsx";

pub const SVELTE: &str = "**/*.svelte";
pub const SVELTE_JS: &str = "**/*.svelte.js";
pub const SVELTE_TS: &str = "**/*.svelte.ts";

pub const JSON: &str = "**/*.json";
pub const JSON5: &str = "**/*.json5";
pub const JSONC: &str = "**/*.jsonc";

/// Test sources: conventional test directories plus suffixed files
pub const TESTS: &[&str] = &[
    "**/{__tests__,tests}/**/*.?([cm])[jt]s?(x)",
    "**/*.{bench,benchmark,spec,test}.?([cm])[jt]s?(x)",
];

/// Test fixture sources, linted more leniently than tests themselves
pub const TESTS_FIXTURE: &[&str] = &[
    "**/fixtures/**/*.?([cm])[jt]s?(x)",
    "**/*.{fixture}.?([cm])[jt]s?(x)",
];

/// Paths no fragment should ever look at
pub const EXCLUDE: &[&str] = &[
    "**/node_modules",
    "**/package-lock.json",
    "**/pnpm-lock.yaml",
    "**/yarn.lock",
    "**/bun.lockb",
    "**/build",
    "**/dist",
    "**/output",
    "**/{temp,.temp,tmp,.tmp}",
    "**/.next",
    "**/.nuxt",
    "**/.svelte-kit",
    "**/.vercel",
    "**/*.min.*",
    "**/.changeset",
    "**/.idea",
    "**/.cache",
    "**/.turbo",
    "**/.yarn",
    "**/CHANGELOG.md",
    "**/LICENSE*",
    "**/__snapshots__",
    "**/coverage",
    "**/eslint.rules.d.ts",
];

/// Copy a pattern list into the owned form fragments carry
pub fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|pattern| (*pattern).to_string()).collect()
}
