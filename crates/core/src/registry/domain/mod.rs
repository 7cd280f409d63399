pub mod manifest_url;
pub mod model_name;
pub mod model_url_lookup;
