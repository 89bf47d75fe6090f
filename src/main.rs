// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> iced::Result {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang value");
        None
    });
    let config_dir = args
        .opt_value_from_os_str("--config-dir", |value| {
            Ok::<_, std::convert::Infallible>(std::path::PathBuf::from(value))
        })
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --config-dir value");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(Flags { lang, config_dir })
}
