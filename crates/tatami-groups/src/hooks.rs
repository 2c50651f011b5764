//! Finalize hooks
//!
//! The root options and every group's options accept an `on_finalize` hook
//! that runs after the fragments for that scope are built. A hook may edit
//! the fragment list in place and return `Ok(None)` to keep it, or return
//! `Ok(Some(replacement))` to swap the whole list out. A hook error aborts
//! the entire assembly.

use crate::context::AssemblyContext;
use std::fmt;
use std::sync::Arc;
use tatami_core::{ConfigFragment, Result, TatamiError};

type HookFn = dyn Fn(&mut Vec<ConfigFragment>, &AssemblyContext) -> anyhow::Result<Option<Vec<ConfigFragment>>>
    + Send
    + Sync;

/// A user-supplied adjustment applied to built fragments
///
/// Hooks are cheap to clone and are carried inside the option structs; they
/// never appear in serialized configuration.
#[derive(Clone)]
pub struct FinalizeHook(Arc<HookFn>);

impl FinalizeHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&mut Vec<ConfigFragment>, &AssemblyContext) -> anyhow::Result<Option<Vec<ConfigFragment>>>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn call(
        &self,
        items: &mut Vec<ConfigFragment>,
        ctx: &AssemblyContext,
    ) -> anyhow::Result<Option<Vec<ConfigFragment>>> {
        (self.0)(items, ctx)
    }
}

impl fmt::Debug for FinalizeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FinalizeHook(..)")
    }
}

/// Run a finalize hook over freshly built fragments
///
/// `scope` names the hook's owner in error messages, e.g. `js` or `root`.
pub(crate) fn apply_finalize(
    hook: Option<&FinalizeHook>,
    scope: &str,
    mut items: Vec<ConfigFragment>,
    ctx: &AssemblyContext,
) -> Result<Vec<ConfigFragment>> {
    let Some(hook) = hook else {
        return Ok(items);
    };

    match hook.call(&mut items, ctx) {
        Ok(Some(replacement)) => Ok(replacement),
        Ok(None) => Ok(items),
        Err(source) => Err(TatamiError::hook_error(scope, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;

    fn fragments(names: &[&str]) -> Vec<ConfigFragment> {
        names.iter().copied().map(ConfigFragment::new).collect()
    }

    #[test]
    fn no_hook_keeps_the_items() {
        let ctx = test_context();
        let out = apply_finalize(None, "js", fragments(&["a", "b"]), &ctx).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn returning_none_keeps_in_place_edits() {
        let ctx = test_context();
        let hook = FinalizeHook::new(|items, _ctx| {
            items.retain(|item| item.name != "drop-me");
            Ok(None)
        });

        let out = apply_finalize(Some(&hook), "js", fragments(&["keep", "drop-me"]), &ctx).unwrap();
        let names: Vec<_> = out.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["keep"]);
    }

    #[test]
    fn returning_some_replaces_the_list() {
        let ctx = test_context();
        let hook = FinalizeHook::new(|_items, _ctx| Ok(Some(vec![ConfigFragment::new("swapped")])));

        let out = apply_finalize(Some(&hook), "js", fragments(&["a", "b"]), &ctx).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "swapped");
    }

    #[test]
    fn hook_errors_name_their_scope() {
        let ctx = test_context();
        let hook = FinalizeHook::new(|_items, _ctx| anyhow::bail!("boom"));

        let err = apply_finalize(Some(&hook), "stylistic", fragments(&["a"]), &ctx).unwrap_err();
        assert!(err.to_string().contains("stylistic"));
    }

    #[test]
    fn replacing_with_empty_is_respected() {
        let ctx = test_context();
        let hook = FinalizeHook::new(|_items, _ctx| Ok(Some(Vec::new())));

        let out = apply_finalize(Some(&hook), "js", fragments(&["a"]), &ctx).unwrap();
        assert!(out.is_empty());
    }
}
