//! URL query parameter access.

use citybuild_core::ClientConfig;

/// Raw value of `key` in the current page URL.
pub fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

/// Client settings from the page URL, e.g. `?log=debug&onboarding=true`.
pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(query_param)
}
