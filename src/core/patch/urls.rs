use serde_json::{Map, Value};
use tracing::{debug, info};

use super::object_at_mut;
use crate::core::coordinate::LibraryName;
use crate::core::descriptor::{walk, ArtifactSite, DescriptorVisitor, NodePath};
use crate::core::error::{PatchError, PatchResult};

/// Produces the download URL for one artifact.
pub trait UrlBuilder {
    fn build(&self, library_name: &str, classifier: Option<&str>) -> PatchResult<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str, Option<&str>) -> PatchResult<String>,
{
    fn build(&self, library_name: &str, classifier: Option<&str>) -> PatchResult<String> {
        self(library_name, classifier)
    }
}

/// The `url-prefix` / `linux-arch` URL policy of the command line.
#[derive(Debug, Clone, Default)]
pub struct DefaultUrlBuilder {
    pub url_prefix: Option<String>,
    pub linux_arch: Option<String>,
}

impl UrlBuilder for DefaultUrlBuilder {
    fn build(&self, library_name: &str, classifier: Option<&str>) -> PatchResult<String> {
        make_default_url(
            self.url_prefix.as_deref(),
            self.linux_arch.as_deref(),
            library_name,
            classifier,
        )
    }
}

/// Build `<prefix>/<module>/<module>[-<classifier>[-<linux-arch>]].jar`.
///
/// The architecture suffix only applies to classifiers starting with
/// `natives-linux`.
pub fn make_default_url(
    url_prefix: Option<&str>,
    linux_arch: Option<&str>,
    library_name: &str,
    classifier: Option<&str>,
) -> PatchResult<String> {
    let url_prefix = url_prefix.ok_or(PatchError::MissingUrlPrefix)?;
    let module = LibraryName::parse(library_name)?.module;

    let mut url = format!("{url_prefix}/{module}/{module}");
    if let Some(classifier) = classifier {
        url.push('-');
        url.push_str(classifier);
        if let Some(arch) = linux_arch {
            if classifier.starts_with("natives-linux") {
                url.push('-');
                url.push_str(arch);
            }
        }
    }
    url.push_str(".jar");
    Ok(url)
}

#[derive(Default)]
struct ArtifactCollector {
    artifacts: Vec<(NodePath, String, Option<String>)>,
}

impl DescriptorVisitor for ArtifactCollector {
    fn artifact(&mut self, _artifact: &Map<String, Value>, site: &ArtifactSite<'_>) {
        self.artifacts.push((
            site.path.clone(),
            site.library_name.to_string(),
            site.classifier.map(str::to_string),
        ));
    }
}

/// Overwrite the `url` of every artifact with `url_builder(library, classifier)`.
pub fn rewrite_urls<B>(descriptor: &mut Value, url_builder: &B) -> PatchResult<()>
where
    B: UrlBuilder + ?Sized,
{
    let mut collector = ArtifactCollector::default();
    walk(descriptor, &mut collector)?;

    info!("Rewriting {} artifact URLs", collector.artifacts.len());
    for (path, library_name, classifier) in collector.artifacts {
        let url = url_builder.build(&library_name, classifier.as_deref())?;
        debug!("{} -> {}", path, url);
        object_at_mut(descriptor, &path)?.insert("url".to_string(), Value::String(url));
    }
    Ok(())
}
