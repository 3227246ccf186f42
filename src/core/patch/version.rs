use serde_json::{Map, Value};
use tracing::info;

use super::object_at_mut;
use crate::core::coordinate::LibraryName;
use crate::core::descriptor::{walk, DescriptorVisitor, NodePath};
use crate::core::error::PatchResult;

#[derive(Default)]
struct LibraryNames {
    libraries: Vec<(NodePath, String)>,
}

impl DescriptorVisitor for LibraryNames {
    fn library(&mut self, library: &Map<String, Value>, path: &NodePath) {
        if let Some(name) = library.get("name").and_then(Value::as_str) {
            self.libraries.push((path.clone(), name.to_string()));
        }
    }
}

/// Set the descriptor `version` and `type`.
///
/// A non-empty `new_version` also replaces the version component of every
/// library name. Empty arguments leave the corresponding fields alone. Every
/// library name is validated before anything is written.
pub fn rewrite_version_build_type(
    descriptor: &mut Value,
    new_version: &str,
    new_build_type: &str,
) -> PatchResult<()> {
    let mut names = LibraryNames::default();
    walk(descriptor, &mut names)?;

    let renamed = if new_version.is_empty() {
        Vec::new()
    } else {
        names
            .libraries
            .iter()
            .map(|(path, name)| -> PatchResult<_> {
                Ok((path, LibraryName::parse(name)?.with_version(new_version)))
            })
            .collect::<PatchResult<Vec<_>>>()?
    };

    let root = object_at_mut(descriptor, &NodePath::root())?;
    if !new_version.is_empty() {
        info!("Setting version to {}", new_version);
        root.insert("version".to_string(), Value::from(new_version));
    }
    if !new_build_type.is_empty() {
        info!("Setting type to {}", new_build_type);
        root.insert("type".to_string(), Value::from(new_build_type));
    }

    for (path, name) in renamed {
        object_at_mut(descriptor, path)?.insert("name".to_string(), Value::String(name.to_string()));
    }
    Ok(())
}
