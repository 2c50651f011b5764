//! The built-in config groups
//!
//! One module per group. Each exposes a `build` function that emits the
//! group's fragments from its normalized options plus the assembly context,
//! and applies the group's finalize hook before returning. Preset rule
//! tables live beside the builder that owns them; the plugin registry wires
//! them into the handles.

pub(crate) mod disables;
pub(crate) mod ignores;
pub(crate) mod imports;
pub(crate) mod js;
pub(crate) mod jsdoc;
pub(crate) mod json;
pub(crate) mod jsx;
pub(crate) mod node;
pub(crate) mod perfectionist;
pub(crate) mod prettier;
pub(crate) mod react;
pub(crate) mod regexp;
pub(crate) mod stylistic;
pub(crate) mod svelte;
pub(crate) mod test;
pub(crate) mod ts;
