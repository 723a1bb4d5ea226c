//! Hook for loading the celebration config embedded in the host page.

use celebration_core::CelebrationConfig;
use yew::prelude::*;

/// Id of the optional `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "celebration-config";

/// Parses the embedded config, falling back to defaults on any problem.
pub fn parse_config(raw: Option<&str>) -> CelebrationConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return CelebrationConfig::default();
    };

    match CelebrationConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring celebration config, using defaults: {}", e);
            CelebrationConfig::default()
        }
    }
}

fn read_embedded_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

#[hook]
pub fn use_celebration_config() -> CelebrationConfig {
    let config = use_memo((), |_| parse_config(read_embedded_config().as_deref()));
    (*config).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_missing_config_uses_defaults() {
        assert_eq!(parse_config(None), CelebrationConfig::default());
        assert_eq!(parse_config(Some("  \n ")), CelebrationConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_embedded_overrides() {
        let config = parse_config(Some(r#"{ "spawn_period_ms": 1500 }"#));
        assert_eq!(config.spawn_period_ms, 1500);
        assert_eq!(config.batch_size, CelebrationConfig::default().batch_size);
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_falls_back() {
        assert_eq!(
            parse_config(Some(r#"{ "batch_size": 0 }"#)),
            CelebrationConfig::default()
        );
        assert_eq!(parse_config(Some("{")), CelebrationConfig::default());
    }
}
