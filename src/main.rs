// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        duration_secs: args.opt_value_from_str("--duration").unwrap_or(None),
        initial_message: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
