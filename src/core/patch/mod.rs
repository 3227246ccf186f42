// ─── Patch Operations ───
// Each operation walks the descriptor once to collect node paths, then
// mutates those nodes. Nothing is edited while the walk is in progress.

mod hashes;
mod natives;
mod urls;
mod version;

pub use hashes::refresh_size_hash;
pub use natives::{filter_natives, platform_suffix};
pub use urls::{make_default_url, rewrite_urls, DefaultUrlBuilder, UrlBuilder};
pub use version::rewrite_version_build_type;

use serde_json::{Map, Value};

use crate::core::descriptor::NodePath;
use crate::core::error::{PatchError, PatchResult};

/// Re-resolve a collected path for mutation.
fn object_at_mut<'a>(
    document: &'a mut Value,
    path: &NodePath,
) -> PatchResult<&'a mut Map<String, Value>> {
    document
        .pointer_mut(&path.to_pointer())
        .and_then(Value::as_object_mut)
        .ok_or_else(|| PatchError::unexpected(path, "an object"))
}
