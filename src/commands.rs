// ─── Drivers ───
// One entry point per command-line filter: parse requests, read the
// document, apply the requested patches in their fixed order, write it back.

use std::io::{Read, Write};

use serde_json::Value;
use tracing::info;

use crate::core::component::patch_requires_version;
use crate::core::downloader::ArtifactFetcher;
use crate::core::error::PatchResult;
use crate::core::json_io::{read_document, write_document};
use crate::core::patch::{
    filter_natives, refresh_size_hash, rewrite_urls, rewrite_version_build_type,
};
use crate::core::request::{ComponentRequest, PatchRequest};

/// Apply every patch `request` asks for.
///
/// Order: version/build type, natives filter, URL rewrite, size/hash refresh.
/// Later steps read names and URLs written by earlier ones.
pub async fn patch_config<F>(
    document: &mut Value,
    request: &PatchRequest,
    fetcher: &F,
) -> PatchResult<()>
where
    F: ArtifactFetcher + ?Sized,
{
    if request.version().is_some() || request.build_type().is_some() {
        rewrite_version_build_type(
            document,
            request.version().unwrap_or_default(),
            request.build_type().unwrap_or_default(),
        )?;
    }

    if let Some(platform) = request.natives() {
        filter_natives(document, &[platform])?;
    }

    if request.urls {
        rewrite_urls(document, &request.url_builder())?;
        refresh_size_hash(document, fetcher).await?;
    }
    Ok(())
}

/// `patch-lwjgl3-config`: requests are validated before any input is read.
pub async fn run_config_filter<I, S, R, W, F>(
    tokens: I,
    input: R,
    output: W,
    fetcher: &F,
) -> PatchResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Read,
    W: Write,
    F: ArtifactFetcher + ?Sized,
{
    let request = PatchRequest::parse(tokens)?;
    info!("Patching descriptor with {:?}", request);

    let mut document = read_document(input)?;
    patch_config(&mut document, &request, fetcher).await?;
    write_document(output, &document)
}

pub fn patch_component(document: &mut Value, request: &ComponentRequest) -> PatchResult<()> {
    if let Some(version) = request.version() {
        patch_requires_version(document, version)?;
    }
    Ok(())
}

/// `patch-lwjgl3-component`: only `version=<value>` is understood.
pub fn run_component_filter<I, S, R, W>(tokens: I, input: R, output: W) -> PatchResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Read,
    W: Write,
{
    let request = ComponentRequest::parse(tokens)?;
    let mut document = read_document(input)?;
    patch_component(&mut document, &request)?;
    write_document(output, &document)
}
