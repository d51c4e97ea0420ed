#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

use snipgen::cli;
use snipgen::error::SnipgenError;
use snipgen::init_locale;

fn main() {
    init_locale();

    if let Err(e) = cli::run() {
        let message = e
            .downcast_ref::<SnipgenError>()
            .map(SnipgenError::display_localized)
            .unwrap_or_else(|| e.to_string());
        eprintln!("{}", t!("messages.error", error = message));
        std::process::exit(1);
    }
}
