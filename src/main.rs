// SPDX-License-Identifier: MPL-2.0
use iced_intake::app::{self, paths, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });
    let i18n_dir: Option<String> = args.opt_value_from_str("--i18n-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --i18n-dir: {err}");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        i18n_dir,
        config_dir,
    })
}
