// ─── Component Dependencies ───
// The smaller component descriptor lists its dependencies under `requires`,
// keyed by `uid`. Only the LWJGL3 entry is ever patched.

use serde_json::Value;
use tracing::info;

use crate::core::descriptor::NodePath;
use crate::core::error::{PatchError, PatchResult};

pub const LWJGL3_UID: &str = "org.lwjgl3";

/// Pin the `org.lwjgl3` dependency to `version`.
///
/// Rewrites `equals` and `suggests` of that entry, each only if present.
/// The whole list is searched, not just its first entry, and a list with no
/// `org.lwjgl3` entry is an error rather than a silent pass-through.
pub fn patch_requires_version(document: &mut Value, version: &str) -> PatchResult<()> {
    let root_path = NodePath::root();
    let requires_path = root_path.key("requires");
    let requires = document
        .as_object_mut()
        .ok_or_else(|| PatchError::unexpected(&root_path, "an object"))?
        .get_mut("requires")
        .ok_or_else(|| PatchError::missing(&root_path, "requires"))?
        .as_array_mut()
        .ok_or_else(|| PatchError::unexpected(&requires_path, "an array"))?;

    for (index, entry) in requires.iter_mut().enumerate() {
        let entry_path = requires_path.index(index);
        let entry = entry
            .as_object_mut()
            .ok_or_else(|| PatchError::unexpected(&entry_path, "an object"))?;
        let uid = entry
            .get("uid")
            .ok_or_else(|| PatchError::missing(&entry_path, "uid"))?;
        if uid.as_str() != Some(LWJGL3_UID) {
            continue;
        }

        info!("Pinning {} to {}", LWJGL3_UID, version);
        for field in ["equals", "suggests"] {
            if let Some(slot) = entry.get_mut(field) {
                *slot = Value::from(version);
            }
        }
        return Ok(());
    }

    Err(PatchError::MissingDependency {
        uid: LWJGL3_UID.to_string(),
    })
}
