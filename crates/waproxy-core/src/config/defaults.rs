//! Default value functions used by serde for config deserialization.

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_static_dir() -> String {
    "./static".to_string()
}

pub fn default_base_url() -> String {
    "https://7103.api.greenapi.com".to_string()
}
