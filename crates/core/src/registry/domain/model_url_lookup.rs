use thiserror::Error;

use crate::registry::domain::manifest_url::{ManifestUrl, ManifestUrlError};
use crate::registry::domain::model_name::ModelName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown model name: {name:?}")]
    NotFound { name: String },
    #[error("invalid manifest URL for {name}: {source}")]
    InvalidUrl {
        name: ModelName,
        #[source]
        source: ManifestUrlError,
    },
    #[error("model {name} is registered more than once")]
    DuplicateName { name: ModelName },
    #[error("model {name} has no manifest URL")]
    MissingName { name: ModelName },
}

/// Domain interface for looking up fallback model manifests.
///
/// Lookups are pure reads, so implementations must be shareable across
/// threads without locking.
pub trait ModelUrlLookup: Send + Sync {
    /// Manifest URL for a known model. Never fails.
    fn get_model(&self, model: ModelName) -> &ManifestUrl;

    /// Manifest URL for a logical name such as `"tinyFaceDetector"`.
    fn get(&self, name: &str) -> Result<&ManifestUrl, RegistryError> {
        let model = name.parse::<ModelName>().map_err(|e| {
            log::trace!("Lookup of unknown model name {name:?}");
            e
        })?;
        Ok(self.get_model(model))
    }

    /// Every registered model with its URL, in [`ModelName::ALL`] order.
    fn entries(&self) -> Vec<(ModelName, &ManifestUrl)> {
        ModelName::ALL
            .into_iter()
            .map(|model| (model, self.get_model(model)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves the same URL for every model.
    struct SingleUrlLookup {
        url: ManifestUrl,
    }

    impl ModelUrlLookup for SingleUrlLookup {
        fn get_model(&self, _model: ModelName) -> &ManifestUrl {
            &self.url
        }
    }

    fn lookup() -> SingleUrlLookup {
        SingleUrlLookup {
            url: ManifestUrl::parse("https://cdn.example.com/weights/model.json").unwrap(),
        }
    }

    #[test]
    fn test_get_known_name_delegates_to_get_model() {
        let lookup = lookup();
        let url = lookup.get("faceExpression").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/weights/model.json");
    }

    #[test]
    fn test_get_unknown_name_is_not_found() {
        let err = lookup().get("unknownModel").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                name: "unknownModel".to_string()
            }
        );
    }

    #[test]
    fn test_entries_follow_declaration_order() {
        let lookup = lookup();
        let names: Vec<ModelName> = lookup.entries().into_iter().map(|(m, _)| m).collect();
        assert_eq!(names, ModelName::ALL.to_vec());
    }

    #[test]
    fn test_error_messages() {
        let not_found = RegistryError::NotFound {
            name: "x".to_string(),
        };
        assert_eq!(not_found.to_string(), "unknown model name: \"x\"");

        let duplicate = RegistryError::DuplicateName {
            name: ModelName::TinyFaceDetector,
        };
        assert_eq!(
            duplicate.to_string(),
            "model tinyFaceDetector is registered more than once"
        );
    }

    #[test]
    fn test_invalid_url_exposes_source() {
        use std::error::Error;

        let err = RegistryError::InvalidUrl {
            name: ModelName::FaceExpression,
            source: ManifestUrlError::MissingHost {
                url: "https://".to_string(),
            },
        };
        assert!(err.source().is_some());
    }
}
