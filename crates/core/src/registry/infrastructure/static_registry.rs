use std::sync::OnceLock;

use crate::registry::domain::manifest_url::ManifestUrl;
use crate::registry::domain::model_name::ModelName;
use crate::registry::domain::model_url_lookup::{ModelUrlLookup, RegistryError};
use crate::shared::constants::{FACE_EXPRESSION_URL, TINY_FACE_DETECTOR_URL};

/// Published CDN manifests used when no bundled weights are available.
pub const FALLBACK_ENTRIES: &[(ModelName, &str)] = &[
    (ModelName::TinyFaceDetector, TINY_FACE_DETECTOR_URL),
    (ModelName::FaceExpression, FACE_EXPRESSION_URL),
];

static FALLBACK_REGISTRY: OnceLock<Result<StaticModelUrlRegistry, RegistryError>> =
    OnceLock::new();

/// Immutable table of manifest URLs, one per [`ModelName`].
///
/// Every URL is validated on construction, so lookups cannot fail for a
/// known model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticModelUrlRegistry {
    // Indexed by `ModelName::index`.
    urls: [ManifestUrl; ModelName::COUNT],
}

impl StaticModelUrlRegistry {
    /// Builds a registry, rejecting invalid URLs, repeated names and
    /// models left without a URL.
    pub fn from_entries(entries: &[(ModelName, &str)]) -> Result<Self, RegistryError> {
        let mut slots: [Option<ManifestUrl>; ModelName::COUNT] = std::array::from_fn(|_| None);

        for &(name, raw) in entries {
            let slot = &mut slots[name.index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateName { name });
            }
            let url = ManifestUrl::parse(raw)
                .map_err(|source| RegistryError::InvalidUrl { name, source })?;
            *slot = Some(url);
        }

        let urls = ModelName::ALL
            .into_iter()
            .map(|name| {
                slots[name.index()]
                    .take()
                    .ok_or(RegistryError::MissingName { name })
            })
            .collect::<Result<Vec<_>, _>>()?;
        // One URL per name was collected above, so the length always matches.
        let urls = urls
            .try_into()
            .map_err(|collected: Vec<ManifestUrl>| RegistryError::MissingName {
                name: ModelName::ALL[collected.len().min(ModelName::COUNT - 1)],
            })?;

        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl ModelUrlLookup for StaticModelUrlRegistry {
    fn get_model(&self, model: ModelName) -> &ManifestUrl {
        &self.urls[model.index()]
    }
}

/// Process-wide registry of fallback manifests.
///
/// Built on first call and shared for the life of the process. A build
/// failure is kept too, so every caller sees the same error.
pub fn fallback_registry() -> Result<&'static StaticModelUrlRegistry, RegistryError> {
    FALLBACK_REGISTRY
        .get_or_init(|| build_logged(FALLBACK_ENTRIES))
        .as_ref()
        .map_err(Clone::clone)
}

fn build_logged(entries: &[(ModelName, &str)]) -> Result<StaticModelUrlRegistry, RegistryError> {
    match StaticModelUrlRegistry::from_entries(entries) {
        Ok(registry) => {
            log::debug!("Fallback model registry ready ({} models)", registry.len());
            Ok(registry)
        }
        Err(e) => {
            log::warn!("Fallback model registry rejected: {e}");
            Err(e)
        }
    }
}
