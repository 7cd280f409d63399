pub const TINY_FACE_DETECTOR_NAME: &str = "tinyFaceDetector";
pub const TINY_FACE_DETECTOR_MANIFEST: &str = "tiny_face_detector_model-weights_manifest.json";
pub const TINY_FACE_DETECTOR_URL: &str =
    "https://cdn.jsdelivr.net/gh/justadudewhohacks/face-api.js@master/weights/tiny_face_detector_model-weights_manifest.json";

pub const FACE_EXPRESSION_NAME: &str = "faceExpression";
pub const FACE_EXPRESSION_MANIFEST: &str = "face_expression_model-weights_manifest.json";
pub const FACE_EXPRESSION_URL: &str =
    "https://cdn.jsdelivr.net/gh/justadudewhohacks/face-api.js@master/weights/face_expression_model-weights_manifest.json";

/// Manifests must be served over TLS.
pub const MANIFEST_SCHEME: &str = "https";
pub const MANIFEST_EXTENSION: &str = ".json";
