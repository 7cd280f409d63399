use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::registry::domain::model_url_lookup::RegistryError;
use crate::shared::constants::{
    FACE_EXPRESSION_MANIFEST, FACE_EXPRESSION_NAME, TINY_FACE_DETECTOR_MANIFEST,
    TINY_FACE_DETECTOR_NAME,
};

/// Logical name of a fallback model whose weights are published on the CDN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelName {
    TinyFaceDetector,
    FaceExpression,
}

impl ModelName {
    pub const ALL: [ModelName; 2] = [ModelName::TinyFaceDetector, ModelName::FaceExpression];
    pub const COUNT: usize = ModelName::ALL.len();

    pub fn as_str(self) -> &'static str {
        match self {
            ModelName::TinyFaceDetector => TINY_FACE_DETECTOR_NAME,
            ModelName::FaceExpression => FACE_EXPRESSION_NAME,
        }
    }

    pub fn manifest_file_name(self) -> &'static str {
        match self {
            ModelName::TinyFaceDetector => TINY_FACE_DETECTOR_MANIFEST,
            ModelName::FaceExpression => FACE_EXPRESSION_MANIFEST,
        }
    }

    /// Position of this name in [`ModelName::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = RegistryError;

    /// Exact, case-sensitive match on the published logical key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelName::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| RegistryError::NotFound {
                name: s.to_string(),
            })
    }
}
