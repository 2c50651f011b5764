//! Global identifier sets
//!
//! The `js` setup fragment declares the globals of the environments the
//! default config targets: browsers, Node.js, and the ES2024 language
//! builtins. Sets are merged in that order; overlapping names keep their
//! first position.

use indexmap::IndexMap;
use tatami_core::GlobalAccess;

const BROWSER: &[&str] = &[
    "window", "document", "navigator", "location", "history", "screen",
    "alert", "confirm", "prompt", "console", "fetch", "XMLHttpRequest",
    "WebSocket", "localStorage", "sessionStorage", "indexedDB", "crypto",
    "performance", "requestAnimationFrame", "cancelAnimationFrame",
    "setTimeout", "clearTimeout", "setInterval", "clearInterval",
    "queueMicrotask", "structuredClone", "atob", "btoa", "Blob", "File",
    "FileReader", "FormData", "Headers", "Request", "Response", "URL",
    "URLSearchParams", "AbortController", "AbortSignal", "CustomEvent",
    "Event", "EventTarget", "MutationObserver", "IntersectionObserver",
    "ResizeObserver", "getComputedStyle", "matchMedia", "customElements",
];

const NODE: &[&str] = &[
    "process", "Buffer", "__dirname", "__filename", "require", "module",
    "global", "setImmediate", "clearImmediate", "TextEncoder", "TextDecoder",
];

// `exports` is reassignable in CommonJS modules
const NODE_WRITABLE: &[&str] = &["exports"];

const ES2024: &[&str] = &[
    "Array", "ArrayBuffer", "Atomics", "BigInt", "BigInt64Array",
    "BigUint64Array", "Boolean", "DataView", "Date", "Error", "EvalError",
    "FinalizationRegistry", "Float32Array", "Float64Array", "Function",
    "Infinity", "Int8Array", "Int16Array", "Int32Array", "Intl", "JSON",
    "Map", "Math", "NaN", "Number", "Object", "Promise", "Proxy",
    "RangeError", "ReferenceError", "Reflect", "RegExp", "Set",
    "SharedArrayBuffer", "String", "Symbol", "SyntaxError", "TypeError",
    "URIError", "Uint8Array", "Uint8ClampedArray", "Uint16Array",
    "Uint32Array", "WeakMap", "WeakRef", "WeakSet", "decodeURI",
    "decodeURIComponent", "encodeURI", "encodeURIComponent", "eval",
    "globalThis", "isFinite", "isNaN", "parseFloat", "parseInt", "undefined",
];

fn extend(
    map: &mut IndexMap<String, GlobalAccess>,
    names: &[&str],
    access: GlobalAccess,
) {
    for name in names {
        map.entry((*name).to_string()).or_insert(access);
    }
}

pub fn browser() -> IndexMap<String, GlobalAccess> {
    let mut map = IndexMap::new();
    extend(&mut map, BROWSER, GlobalAccess::Readonly);
    map
}

pub fn node() -> IndexMap<String, GlobalAccess> {
    let mut map = IndexMap::new();
    extend(&mut map, NODE, GlobalAccess::Readonly);
    extend(&mut map, NODE_WRITABLE, GlobalAccess::Writable);
    map
}

pub fn es2024() -> IndexMap<String, GlobalAccess> {
    let mut map = IndexMap::new();
    extend(&mut map, ES2024, GlobalAccess::Readonly);
    map
}

/// The combined browser + node + es2024 set the default config declares
pub fn default_globals() -> IndexMap<String, GlobalAccess> {
    let mut map = browser();
    extend(&mut map, NODE, GlobalAccess::Readonly);
    extend(&mut map, NODE_WRITABLE, GlobalAccess::Writable);
    extend(&mut map, ES2024, GlobalAccess::Readonly);
    map
}
