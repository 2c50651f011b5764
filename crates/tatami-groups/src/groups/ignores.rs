//! Ignores group
//!
//! Emits the global ignore fragment: the built-in excludes plus any custom
//! patterns, and optionally the project's `.gitignore` translated into
//! ignore globs. This is the only group that touches the filesystem while
//! building.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::{GitignoreOptions, IgnoresOptions};
use tatami_core::{ConfigFragment, Result, TatamiError, globs, normalize};

pub(crate) async fn build(
    options: &IgnoresOptions,
    ctx: &AssemblyContext,
) -> Result<Vec<ConfigFragment>> {
    let mut patterns = globs::patterns(globs::EXCLUDE);
    if let Some(custom) = &options.custom_ignores {
        patterns.extend(custom.iter().cloned());
    }

    let mut items = vec![ConfigFragment {
        name: "tatami/ignores".to_string(),
        ignores: Some(patterns),
        ..ConfigFragment::default()
    }];

    let gitignore = normalize(options.gitignore.clone(), false);
    if gitignore.enabled {
        let translated = read_gitignores(&gitignore.options, ctx).await?;
        if !translated.is_empty() {
            items.push(ConfigFragment {
                name: "tatami/ignores/gitignore".to_string(),
                ignores: Some(translated),
                ..ConfigFragment::default()
            });
        }
    }

    apply_finalize(options.on_finalize.as_ref(), "ignores", items, ctx)
}

/// Read and translate the configured gitignore files
///
/// A missing file is an error in strict mode and skipped otherwise.
async fn read_gitignores(
    options: &GitignoreOptions,
    ctx: &AssemblyContext,
) -> Result<Vec<String>> {
    let mut patterns = Vec::new();

    for file in &options.files {
        let path = ctx.probe().root().join(file);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(source) if options.strict => {
                return Err(TatamiError::io_error(path, source));
            }
            Err(_) => {
                tracing::debug!(file, "skipping missing gitignore file");
                continue;
            }
        };

        patterns.extend(contents.lines().filter_map(translate_line));
    }

    Ok(patterns)
}

/// Translate one gitignore line into an ignore glob
///
/// Git semantics: `#` starts a comment, a leading `!` re-includes, a leading
/// `/` anchors to the root, and a pattern without a slash matches at any
/// depth. Returns `None` for lines that carry no pattern.
fn translate_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (negated, pattern) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    if pattern.is_empty() {
        return None;
    }

    let anchored = pattern.starts_with('/');
    let pattern = pattern.trim_start_matches('/');

    // a slash anywhere but the end anchors the pattern to the root
    let has_inner_slash = pattern.trim_end_matches('/').contains('/');
    let mut glob = if anchored || has_inner_slash {
        pattern.to_string()
    } else {
        format!("**/{pattern}")
    };

    if glob.ends_with('/') {
        glob.push_str("**");
    }

    Some(if negated { format!("!{glob}") } else { glob })
}
