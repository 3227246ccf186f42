// ─── LWJGL3 Meta Patch Core ───
// Field-level patches for launcher component descriptors.
//
// Architecture:
//   core/
//     descriptor/ — Node paths + validating walker with visitor hooks
//     patch/      — URL rewrite, size/hash refresh, natives filter, version rewrite
//     coordinate  — `org:module:version` library names
//     downloader/ — Artifact fetcher trait + HTTP implementation, SHA-1
//     request     — `key=value` request tokens and per-run settings
//     component   — `requires` patching for the component descriptor
//     json_io     — Descriptor input and 4-space pretty output

pub mod component;
pub mod coordinate;
pub mod descriptor;
pub mod downloader;
pub mod error;
pub mod http;
pub mod json_io;
pub mod patch;
pub mod request;
