//! Config assembly
//!
//! Turns a [`ConfigOptions`] into the flat list of [`ConfigFragment`]s:
//! probe the host project, resolve every group toggle, then run the enabled
//! builders in registry order and flatten their output. User-supplied
//! fragments land after the groups; the global finalize hook runs last.

use crate::context::{AssemblyContext, DetectedPackages};
use crate::groups;
use crate::hooks::apply_finalize;
use crate::options::{ConfigOptions, GroupName, ResolvedOptions};
use futures::future::try_join_all;
use tatami_core::{ConfigFragment, PackageProbe, Result};

/// Assemble a configuration, probing packages from the current directory
pub async fn compose(options: ConfigOptions) -> Result<Vec<ConfigFragment>> {
    compose_in(options, PackageProbe::from_current_dir()).await
}

/// Assemble a configuration against an explicit project root
pub async fn compose_in(
    mut options: ConfigOptions,
    probe: PackageProbe,
) -> Result<Vec<ConfigFragment>> {
    let root_hook = options.on_finalize.take();
    let extra_configs = std::mem::take(&mut options.extra_configs);

    let detected = DetectedPackages::scan(&probe);
    let mut resolved = ResolvedOptions::resolve(options, &detected);
    // the base language group cannot be disabled
    resolved.js.enabled = true;

    let ctx = AssemblyContext::new(resolved, detected, probe);

    let enabled: Vec<GroupName> = GroupName::ALL
        .iter()
        .copied()
        .filter(|group| ctx.options.enabled(*group))
        .collect();
    tracing::debug!(groups = enabled.len(), "assembling configuration");

    let built = try_join_all(enabled.iter().map(|group| build_group(*group, &ctx))).await?;

    let mut fragments: Vec<ConfigFragment> = built.into_iter().flatten().collect();
    fragments.extend(extra_configs);
    tracing::debug!(fragments = fragments.len(), "assembly complete");

    apply_finalize(root_hook.as_ref(), "root", fragments, &ctx)
}

async fn build_group(group: GroupName, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let options = &ctx.options;
    match group {
        GroupName::Ignores => groups::ignores::build(&options.ignores.options, ctx).await,
        GroupName::Js => groups::js::build(&options.js.options, ctx),
        GroupName::Imports => groups::imports::build(&options.imports.options, ctx),
        GroupName::Ts => groups::ts::build(&options.ts.options, ctx),
        GroupName::Node => groups::node::build(&options.node.options, ctx),
        GroupName::Jsdoc => groups::jsdoc::build(&options.jsdoc.options, ctx),
        GroupName::Regexp => groups::regexp::build(&options.regexp.options, ctx),
        GroupName::Perfectionist => {
            groups::perfectionist::build(&options.perfectionist.options, ctx)
        }
        GroupName::Stylistic => groups::stylistic::build(&options.stylistic.options, ctx),
        GroupName::Json => groups::json::build(&options.json.options, ctx),
        GroupName::Jsx => groups::jsx::build(&options.jsx.options, ctx),
        GroupName::React => groups::react::build(&options.react.options, ctx),
        GroupName::Svelte => groups::svelte::build(&options.svelte.options, ctx),
        GroupName::Test => groups::test::build(&options.test.options, ctx),
        GroupName::Prettier => groups::prettier::build(&options.prettier.options, ctx),
        GroupName::Disables => groups::disables::build(&options.disables.options, ctx),
    }
}
