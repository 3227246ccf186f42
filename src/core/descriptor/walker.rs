// ─── Descriptor Walker ───
// Validates the LWJGL3 descriptor shape and dispatches each recognised node
// to a visitor. The walk never mutates: callers collect node paths here and
// edit the document afterwards.

use serde_json::{Map, Value};
use tracing::debug;

use super::NodePath;
use crate::core::error::{PatchError, PatchResult};

/// Fields every artifact record must carry, checked in this order.
const ARTIFACT_FIELDS: [&str; 3] = ["sha1", "size", "url"];

/// Fields the descriptor root must carry, checked in this order.
const ROOT_FIELDS: [&str; 3] = ["libraries", "type", "version"];

/// Where an artifact record sits inside the descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSite<'a> {
    /// `org:module:version` of the owning library.
    pub library_name: &'a str,
    /// Classifier key, or `None` for `downloads.artifact`.
    pub classifier: Option<&'a str>,
    pub path: &'a NodePath,
}

/// Extension points of [`walk`].
///
/// Every method defaults to doing nothing, so a visitor only implements the
/// node kinds it cares about. A node is validated before its method runs.
pub trait DescriptorVisitor {
    /// The descriptor root, once, before any library.
    fn lwjgl3(&mut self, _root: &Map<String, Value>) {}

    fn library(&mut self, _library: &Map<String, Value>, _path: &NodePath) {}

    /// Both `downloads.artifact` and every entry of `downloads.classifiers`.
    fn artifact(&mut self, _artifact: &Map<String, Value>, _site: &ArtifactSite<'_>) {}

    /// The whole `downloads.classifiers` map, before its entries are walked.
    fn classifiers(&mut self, _classifiers: &Map<String, Value>, _path: &NodePath) {}

    /// The `natives` map of a library. Natives are a leaf.
    fn natives(&mut self, _natives: &Map<String, Value>, _library_name: &str, _path: &NodePath) {}
}

impl DescriptorVisitor for () {}

/// Walk a whole descriptor, failing on the first structural error.
pub fn walk<V>(document: &Value, visitor: &mut V) -> PatchResult<()>
where
    V: DescriptorVisitor + ?Sized,
{
    let path = NodePath::root();
    let root = as_object(document, &path)?;
    for field in ROOT_FIELDS {
        require(root, &path, field)?;
    }
    visitor.lwjgl3(root);

    let libraries_path = path.key("libraries");
    let libraries = root["libraries"]
        .as_array()
        .ok_or_else(|| PatchError::unexpected(&libraries_path, "an array"))?;
    for (index, library) in libraries.iter().enumerate() {
        walk_library(library, &libraries_path.index(index), visitor)?;
    }

    debug!("Walked descriptor with {} libraries", libraries.len());
    Ok(())
}

fn walk_library<V>(library: &Value, path: &NodePath, visitor: &mut V) -> PatchResult<()>
where
    V: DescriptorVisitor + ?Sized,
{
    let library = as_object(library, path)?;
    let name = require(library, path, "name")?
        .as_str()
        .ok_or_else(|| PatchError::unexpected(&path.key("name"), "a string"))?;
    visitor.library(library, path);

    if let Some(downloads) = library.get("downloads") {
        walk_downloads(downloads, &path.key("downloads"), name, visitor)?;
    }

    if let Some(natives) = library.get("natives") {
        let natives_path = path.key("natives");
        visitor.natives(as_object(natives, &natives_path)?, name, &natives_path);
    }
    Ok(())
}

fn walk_downloads<V>(
    downloads: &Value,
    path: &NodePath,
    library_name: &str,
    visitor: &mut V,
) -> PatchResult<()>
where
    V: DescriptorVisitor + ?Sized,
{
    let downloads = as_object(downloads, path)?;
    let artifact = require(downloads, path, "artifact")?;
    walk_artifact(artifact, &path.key("artifact"), library_name, None, visitor)?;

    if let Some(classifiers) = downloads.get("classifiers") {
        let classifiers_path = path.key("classifiers");
        let classifiers = as_object(classifiers, &classifiers_path)?;
        visitor.classifiers(classifiers, &classifiers_path);
        for (classifier, artifact) in classifiers {
            walk_artifact(
                artifact,
                &classifiers_path.key(classifier),
                library_name,
                Some(classifier.as_str()),
                visitor,
            )?;
        }
    }
    Ok(())
}

fn walk_artifact<V>(
    artifact: &Value,
    path: &NodePath,
    library_name: &str,
    classifier: Option<&str>,
    visitor: &mut V,
) -> PatchResult<()>
where
    V: DescriptorVisitor + ?Sized,
{
    let artifact = as_object(artifact, path)?;
    for field in ARTIFACT_FIELDS {
        require(artifact, path, field)?;
    }
    visitor.artifact(
        artifact,
        &ArtifactSite {
            library_name,
            classifier,
            path,
        },
    );
    Ok(())
}

fn as_object<'a>(value: &'a Value, path: &NodePath) -> PatchResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| PatchError::unexpected(path, "an object"))
}

fn require<'a>(
    node: &'a Map<String, Value>,
    path: &NodePath,
    field: &'static str,
) -> PatchResult<&'a Value> {
    node.get(field)
        .ok_or_else(|| PatchError::missing(path, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::tests::sample_descriptor;

    /// Records every callback as a short string.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DescriptorVisitor for Recorder {
        fn lwjgl3(&mut self, root: &Map<String, Value>) {
            self.events.push(format!("lwjgl3 {}", root["version"]));
        }

        fn library(&mut self, library: &Map<String, Value>, path: &NodePath) {
            self.events
                .push(format!("library {} {}", path, library["name"].as_str().unwrap()));
        }

        fn artifact(&mut self, _artifact: &Map<String, Value>, site: &ArtifactSite<'_>) {
            self.events.push(format!(
                "artifact {} {}",
                site.library_name,
                site.classifier.unwrap_or("-")
            ));
        }

        fn classifiers(&mut self, classifiers: &Map<String, Value>, path: &NodePath) {
            self.events
                .push(format!("classifiers {} {}", path, classifiers.len()));
        }

        fn natives(&mut self, natives: &Map<String, Value>, library_name: &str, _path: &NodePath) {
            self.events
                .push(format!("natives {} {}", library_name, natives.len()));
        }
    }

    fn record(doc: &Value) -> (PatchResult<()>, Vec<String>) {
        let mut recorder = Recorder::default();
        let result = walk(doc, &mut recorder);
        (result, recorder.events)
    }

    #[test]
    fn empty_visitor_leaves_document_untouched() {
        let doc = sample_descriptor();
        let before = serde_json::to_string_pretty(&doc).unwrap();
        walk(&doc, &mut ()).unwrap();
        assert_eq!(serde_json::to_string_pretty(&doc).unwrap(), before);
    }

    #[test]
    fn callbacks_follow_document_order() {
        let (result, events) = record(&sample_descriptor());
        result.unwrap();
        assert_eq!(
            events,
            vec![
                "lwjgl3 \"3.3.3\"",
                "library libraries[0] org.lwjgl:lwjgl:3.3.3",
                "artifact org.lwjgl:lwjgl:3.3.3 -",
                "classifiers libraries[0].downloads.classifiers 3",
                "artifact org.lwjgl:lwjgl:3.3.3 natives-linux",
                "artifact org.lwjgl:lwjgl:3.3.3 natives-windows",
                "artifact org.lwjgl:lwjgl:3.3.3 natives-osx",
                "natives org.lwjgl:lwjgl:3.3.3 3",
                "library libraries[1] org.lwjgl:lwjgl-glfw:3.3.3",
                "artifact org.lwjgl:lwjgl-glfw:3.3.3 -",
            ]
        );
    }

    #[test]
    fn library_without_downloads_or_natives_is_accepted() {
        let doc = serde_json::json!({
            "type": "release",
            "version": "3.3.3",
            "libraries": [{"name": "org.lwjgl:lwjgl:3.3.3"}]
        });
        let (result, events) = record(&doc);
        result.unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn missing_root_fields_are_reported_in_order() {
        for field in ["libraries", "type", "version"] {
            let mut doc = sample_descriptor();
            doc.as_object_mut().unwrap().remove(field);
            let (result, events) = record(&doc);
            let err = result.unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("<root>: missing required field `{field}`")
            );
            assert!(events.is_empty());
        }
    }

    #[test]
    fn missing_library_name_stops_before_library_callback() {
        let mut doc = sample_descriptor();
        doc["libraries"][1].as_object_mut().unwrap().remove("name");
        let (result, events) = record(&doc);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "libraries[1]: missing required field `name`"
        );
        assert_eq!(events.last().unwrap(), "natives org.lwjgl:lwjgl:3.3.3 3");
    }

    #[test]
    fn missing_artifact_under_downloads_is_reported() {
        let mut doc = sample_descriptor();
        doc["libraries"][0]["downloads"]
            .as_object_mut()
            .unwrap()
            .remove("artifact");
        let (result, events) = record(&doc);
        assert_eq!(
            result.unwrap_err().to_string(),
            "libraries[0].downloads: missing required field `artifact`"
        );
        assert_eq!(events.last().unwrap(), "library libraries[0] org.lwjgl:lwjgl:3.3.3");
    }

    #[test]
    fn missing_artifact_fields_are_reported_with_classifier_path() {
        for field in ["sha1", "size", "url"] {
            let mut doc = sample_descriptor();
            doc["libraries"][0]["downloads"]["classifiers"]["natives-windows"]
                .as_object_mut()
                .unwrap()
                .remove(field);
            let (result, events) = record(&doc);
            let err = result.unwrap_err();
            assert!(matches!(err, PatchError::MissingField { field: f, .. } if f == field));
            assert_eq!(
                err.to_string(),
                format!(
                    "libraries[0].downloads.classifiers.natives-windows: missing required field `{field}`"
                )
            );
            assert_eq!(
                events.last().unwrap(),
                "artifact org.lwjgl:lwjgl:3.3.3 natives-linux"
            );
            assert!(!events.iter().any(|e| e.starts_with("natives")));
        }
    }

    #[test]
    fn missing_direct_artifact_field_is_reported() {
        let mut doc = sample_descriptor();
        doc["libraries"][1]["downloads"]["artifact"]
            .as_object_mut()
            .unwrap()
            .remove("url");
        let (result, _) = record(&doc);
        assert_eq!(
            result.unwrap_err().to_string(),
            "libraries[1].downloads.artifact: missing required field `url`"
        );
    }

    #[test]
    fn wrong_node_kinds_are_rejected() {
        let doc = serde_json::json!({"type": "release", "version": "1", "libraries": {}});
        assert_eq!(
            walk(&doc, &mut ()).unwrap_err().to_string(),
            "libraries: expected an array"
        );

        let doc = serde_json::json!({
            "type": "release",
            "version": "1",
            "libraries": [{"name": 5}]
        });
        assert_eq!(
            walk(&doc, &mut ()).unwrap_err().to_string(),
            "libraries[0].name: expected a string"
        );

        assert_eq!(
            walk(&serde_json::json!([]), &mut ()).unwrap_err().to_string(),
            "<root>: expected an object"
        );
    }

    #[test]
    fn non_object_nodes_are_rejected_with_their_path() {
        let cases: [(&str, Value, &str); 6] = [
            ("/libraries/1", serde_json::json!(3), "libraries[1]: expected an object"),
            (
                "/libraries/0/downloads",
                serde_json::json!(1),
                "libraries[0].downloads: expected an object",
            ),
            (
                "/libraries/0/downloads/artifact",
                serde_json::json!("lwjgl.jar"),
                "libraries[0].downloads.artifact: expected an object",
            ),
            (
                "/libraries/0/downloads/classifiers",
                serde_json::json!([]),
                "libraries[0].downloads.classifiers: expected an object",
            ),
            (
                "/libraries/0/downloads/classifiers/natives-osx",
                serde_json::json!(null),
                "libraries[0].downloads.classifiers.natives-osx: expected an object",
            ),
            (
                "/libraries/0/natives",
                serde_json::json!("x"),
                "libraries[0].natives: expected an object",
            ),
        ];

        for (pointer, replacement, message) in cases {
            let mut doc = sample_descriptor();
            *doc.pointer_mut(pointer).unwrap() = replacement;
            let err = walk(&doc, &mut ()).unwrap_err();
            assert!(matches!(err, PatchError::UnexpectedType { .. }), "{pointer}");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut doc = sample_descriptor();
        doc["formatVersion"] = serde_json::json!(1);
        doc["libraries"][0]["rules"] = serde_json::json!([{"action": "allow"}]);
        walk(&doc, &mut ()).unwrap();
    }
}
