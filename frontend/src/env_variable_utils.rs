use js_sys::Reflect;
use lazy_static::lazy_static;
use wasm_bindgen::JsValue;

const DEFAULT_APP_NAME: &str = "Podcast Platform";

lazy_static! {
    pub static ref GALLERY_ENV: GalleryEnv = GalleryEnv::from_window();
}

/// Settings injected by `index.html` through `window.ENV_CONFIG`.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEnv {
    /// Prefix for `videos.json`; empty means same origin as the page.
    pub public_url: String,
    pub app_name: String,
    pub debug: bool,
}

impl GalleryEnv {
    pub fn from_window() -> Self {
        let env_config = web_sys::window()
            .and_then(|window| Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok())
            .filter(|config| config.is_object());

        if env_config.is_none() {
            log::warn!("window.ENV_CONFIG missing, using defaults");
        }

        Self::from_lookup(|key| {
            env_config
                .as_ref()
                .and_then(|config| Reflect::get(config, &JsValue::from_str(key)).ok())
                .and_then(|value| value.as_string())
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        GalleryEnv {
            public_url: lookup("PUBLIC_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            app_name: lookup("APP_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug: lookup("DEBUG_MODE")
                .map(|flag| flag.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn videos_url(&self) -> String {
        format!("{}/videos.json", self.public_url)
    }
}
