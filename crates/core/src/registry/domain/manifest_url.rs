use std::fmt;

use reqwest::Url;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::shared::constants::{MANIFEST_EXTENSION, MANIFEST_SCHEME};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestUrlError {
    #[error("malformed URL {url:?}: {reason}")]
    Malformed { url: String, reason: String },
    #[error("unsupported scheme {scheme:?} in {url}, expected https")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("URL {url} has no host")]
    MissingHost { url: String },
    #[error("URL {url} has no resource path")]
    MissingPath { url: String },
    #[error("URL {url} does not point to a .json manifest")]
    NotJson { url: String },
    #[error("shard path is empty")]
    EmptyShardPath,
    #[error("shard path {path:?} resolves outside the manifest directory of {manifest}")]
    ShardOutsideManifestDir { manifest: String, path: String },
}

/// An absolute `https` URL to a JSON weight manifest.
///
/// Only constructed through [`ManifestUrl::parse`], so every value held by a
/// registry has already passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManifestUrl {
    url: Url,
}

impl ManifestUrl {
    pub fn parse(raw: &str) -> Result<Self, ManifestUrlError> {
        let url = Url::parse(raw).map_err(|e| ManifestUrlError::Malformed {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != MANIFEST_SCHEME {
            return Err(ManifestUrlError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: url.scheme().to_string(),
            });
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(ManifestUrlError::MissingHost {
                url: raw.to_string(),
            });
        }
        if url.path().is_empty() || url.path() == "/" {
            return Err(ManifestUrlError::MissingPath {
                url: raw.to_string(),
            });
        }
        if !url.path().ends_with(MANIFEST_EXTENSION) {
            return Err(ManifestUrlError::NotJson {
                url: raw.to_string(),
            });
        }

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Last path segment, e.g. `tiny_face_detector_model-weights_manifest.json`.
    pub fn file_name(&self) -> &str {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
    }

    /// Resolves a shard path listed in the manifest against the manifest's
    /// directory. The result always lies under that directory.
    pub fn shard_url(&self, path: &str) -> Result<Url, ManifestUrlError> {
        if path.trim().is_empty() {
            return Err(ManifestUrlError::EmptyShardPath);
        }
        let outside = || ManifestUrlError::ShardOutsideManifestDir {
            manifest: self.url.to_string(),
            path: path.to_string(),
        };

        let dir = self
            .url
            .join("./")
            .map_err(|e| ManifestUrlError::Malformed {
                url: self.url.to_string(),
                reason: e.to_string(),
            })?;
        let shard = dir.join(path).map_err(|e| ManifestUrlError::Malformed {
            url: path.to_string(),
            reason: e.to_string(),
        })?;

        // Same origin, and a path strictly below the directory.
        let inside = shard.origin() == dir.origin()
            && shard.path().len() > dir.path().len()
            && shard.path().starts_with(dir.path());
        if !inside {
            return Err(outside());
        }
        Ok(shard)
    }
}

impl fmt::Display for ManifestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ManifestUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for ManifestUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
