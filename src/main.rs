// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if let Ok(Some(dir)) = args.opt_value_from_str::<_, String>("--config-dir") {
        // Set before the app loads config; still single-threaded here.
        std::env::set_var("ICED_FOLIO_CONFIG_DIR", dir);
    }

    let flags = Flags {
        theme: args
            .opt_value_from_str::<_, String>("--theme")
            .ok()
            .flatten()
            .and_then(|value| parse_theme(&value)),
        reduced_motion: args.contains("--reduced-motion"),
    };

    app::run(flags)
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        other => {
            tracing::warn!(theme = other, "unknown theme flag, using configured mode");
            None
        }
    }
}
