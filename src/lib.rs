#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod path_utils;
pub mod snippet;
pub mod templates;

#[cfg(test)]
pub mod test_utils;

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ko"];

pub fn init_locale() {
    let requested = std::env::var(config::ENV_LANG).ok();
    rust_i18n::set_locale(&resolve_locale(requested.as_deref()));
}

pub fn resolve_locale(requested: Option<&str>) -> String {
    requested
        .map(|value| value.trim().to_lowercase())
        .and_then(|value| {
            SUPPORTED_LOCALES
                .iter()
                .find(|locale| value == **locale || value.starts_with(&format!("{locale}_")))
                .map(|locale| locale.to_string())
        })
        .unwrap_or_else(|| "en".to_string())
}
