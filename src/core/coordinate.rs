use std::fmt;

use crate::core::error::{PatchError, PatchResult};

/// A library name of the form `organization:module:version`.
///
/// Unlike a general Maven coordinate there is no classifier or packaging
/// part: exactly three non-empty colon-separated components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryName {
    pub organization: String,
    pub module: String,
    pub version: String,
}

impl LibraryName {
    /// Parse `org:module:version`.
    pub fn parse(name: &str) -> PatchResult<Self> {
        let parts: Vec<&str> = name.split(':').collect();
        match parts.as_slice() {
            [organization, module, version]
                if parts.iter().all(|part| !part.is_empty()) =>
            {
                Ok(Self {
                    organization: organization.to_string(),
                    module: module.to_string(),
                    version: version.to_string(),
                })
            }
            _ => Err(PatchError::InvalidLibraryName(name.to_string())),
        }
    }

    /// Same organization and module, different version.
    pub fn with_version(&self, version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.organization, self.module, self.version)
    }
}
