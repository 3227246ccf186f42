// ─── Request Tokens ───
// Command-line requests are flat `key` or `key=v1,v2,...` tokens.

use crate::core::error::{PatchError, PatchResult};
use crate::core::patch::DefaultUrlBuilder;

/// One command-line request, split into key and optional value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    pub key: String,
    /// `None` for a bare flag, `Some` when the token contained `=`.
    pub values: Option<Vec<String>>,
}

impl RequestToken {
    /// Split `key=v1,v2` into a trimmed key and trimmed values.
    ///
    /// A token with more than one `=` is kept whole as its key, so it never
    /// names a known request.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((key, values)) if !values.contains('=') => Self {
                key: key.trim().to_string(),
                values: Some(values.split(',').map(|v| v.trim().to_string()).collect()),
            },
            _ => Self {
                key: raw.to_string(),
                values: None,
            },
        }
    }

    /// The value of a `key=value` token carrying exactly one value.
    fn single_value(&self) -> Option<&str> {
        match self.values.as_deref() {
            Some([value]) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Per-run settings of the descriptor filter.
///
/// `None` means the request was not given; `Some("")` means it was given
/// with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchRequest {
    pub natives: Option<String>,
    pub urls: bool,
    pub url_prefix: Option<String>,
    pub linux_arch: Option<String>,
    pub version: Option<String>,
    pub build_type: Option<String>,
}

impl PatchRequest {
    /// Parse request tokens in order; a repeated key keeps its last value.
    pub fn parse<I, S>(tokens: I) -> PatchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut request = Self::default();
        for raw in tokens {
            let raw = raw.as_ref();
            let token = RequestToken::parse(raw);
            let slot = match token.key.as_str() {
                "urls" if token.values.is_none() => {
                    request.urls = true;
                    continue;
                }
                "natives" => &mut request.natives,
                "url-prefix" => &mut request.url_prefix,
                "linux-arch" => &mut request.linux_arch,
                "version" => &mut request.version,
                "build-type" => &mut request.build_type,
                _ => return Err(PatchError::InvalidRequest(raw.to_string())),
            };
            let value = token
                .single_value()
                .ok_or_else(|| PatchError::InvalidRequest(raw.to_string()))?;
            *slot = Some(value.to_string());
        }
        Ok(request)
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(&self.version)
    }

    pub fn build_type(&self) -> Option<&str> {
        non_empty(&self.build_type)
    }

    /// Platform allow-list for the natives filter, if one was requested.
    pub fn natives(&self) -> Option<&str> {
        non_empty(&self.natives)
    }

    pub fn url_builder(&self) -> DefaultUrlBuilder {
        DefaultUrlBuilder {
            url_prefix: self.url_prefix.clone(),
            linux_arch: self.linux_arch.clone(),
        }
    }
}

/// Per-run settings of the component filter: only `version=<value>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRequest {
    pub version: Option<String>,
}

impl ComponentRequest {
    pub fn parse<I, S>(tokens: I) -> PatchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut request = Self::default();
        for raw in tokens {
            let raw = raw.as_ref();
            let token = RequestToken::parse(raw);
            match (token.key.as_str(), token.single_value()) {
                ("version", Some(value)) => request.version = Some(value.to_string()),
                _ => return Err(PatchError::InvalidRequest(raw.to_string())),
            }
        }
        Ok(request)
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(&self.version)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
