use serde_json::{Map, Value};
use tracing::{debug, info};

use super::object_at_mut;
use crate::core::descriptor::{walk, DescriptorVisitor, NodePath};
use crate::core::error::PatchResult;

const NATIVES_PREFIX: &str = "natives-";

/// Platform encoded in a `natives-` classifier.
///
/// `natives-linux` and `natives-linux-arm64` both yield `linux`; anything
/// without the prefix yields `None`.
pub fn platform_suffix(classifier: &str) -> Option<&str> {
    let rest = classifier.strip_prefix(NATIVES_PREFIX)?;
    Some(rest.split('-').next().unwrap_or(rest))
}

fn is_disallowed<S: AsRef<str>>(classifier: &str, allowed: &[S]) -> bool {
    match platform_suffix(classifier) {
        Some(suffix) => !allowed.iter().any(|a| a.as_ref() == suffix),
        None => false,
    }
}

#[derive(Default)]
struct NativesCollector {
    classifiers: Vec<NodePath>,
    natives: Vec<NodePath>,
}

impl DescriptorVisitor for NativesCollector {
    fn classifiers(&mut self, _classifiers: &Map<String, Value>, path: &NodePath) {
        self.classifiers.push(path.clone());
    }

    fn natives(&mut self, _natives: &Map<String, Value>, _library_name: &str, path: &NodePath) {
        self.natives.push(path.clone());
    }
}

/// Drop native artifacts for platforms outside `allowed`.
///
/// Removes `classifiers` keys and `natives` entries (matched by value) whose
/// platform suffix is not allowed. Entries without the `natives-` prefix are
/// kept. The two maps are filtered independently of each other.
pub fn filter_natives<S: AsRef<str>>(descriptor: &mut Value, allowed: &[S]) -> PatchResult<()> {
    let mut collector = NativesCollector::default();
    walk(descriptor, &mut collector)?;

    info!(
        "Filtering natives in {} classifier maps and {} natives maps",
        collector.classifiers.len(),
        collector.natives.len()
    );

    for path in &collector.classifiers {
        let classifiers = object_at_mut(descriptor, path)?;
        classifiers.retain(|classifier, _| {
            let drop = is_disallowed(classifier, allowed);
            if drop {
                debug!("Removing {}.{}", path, classifier);
            }
            !drop
        });
    }

    for path in &collector.natives {
        let natives = object_at_mut(descriptor, path)?;
        natives.retain(|platform, classifier| {
            let drop = classifier
                .as_str()
                .is_some_and(|classifier| is_disallowed(classifier, allowed));
            if drop {
                debug!("Removing {}.{}", path, platform);
            }
            !drop
        });
    }
    Ok(())
}
