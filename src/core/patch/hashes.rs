use serde_json::{Map, Value};
use tracing::{debug, info};

use super::object_at_mut;
use crate::core::descriptor::{walk, ArtifactSite, DescriptorVisitor, NodePath};
use crate::core::downloader::{sha1_hex, ArtifactFetcher};
use crate::core::error::{PatchError, PatchResult};

/// Progress line written to standard error before each fetch.
fn access_line(url: &str) -> String {
    format!("Accessing {url}...")
}

#[derive(Default)]
struct ArtifactPaths(Vec<NodePath>);

impl DescriptorVisitor for ArtifactPaths {
    fn artifact(&mut self, _artifact: &Map<String, Value>, site: &ArtifactSite<'_>) {
        self.0.push(site.path.clone());
    }
}

/// Recompute `size` and `sha1` of every artifact from the bytes at its `url`.
///
/// Artifacts are fetched one at a time, in document order. The first failed
/// fetch aborts the refresh. Each fetch is announced on standard error as
/// `Accessing <url>...`, whatever the fetcher.
pub async fn refresh_size_hash<F>(descriptor: &mut Value, fetcher: &F) -> PatchResult<()>
where
    F: ArtifactFetcher + ?Sized,
{
    let mut paths = ArtifactPaths::default();
    walk(descriptor, &mut paths)?;

    info!("Refreshing size and SHA-1 of {} artifacts", paths.0.len());
    for path in &paths.0 {
        let artifact = object_at_mut(descriptor, path)?;
        let url = artifact
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| PatchError::unexpected(&path.key("url"), "a string"))?
            .to_string();

        eprintln!("{}", access_line(&url));
        let bytes = fetcher.fetch(&url).await?;
        let sha1 = sha1_hex(&bytes);
        debug!("{}: {} bytes, sha1 {}", url, bytes.len(), sha1);

        artifact.insert("size".to_string(), Value::from(bytes.len() as u64));
        artifact.insert("sha1".to_string(), Value::String(sha1));
    }
    Ok(())
}
