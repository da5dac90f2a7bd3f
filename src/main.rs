// SPDX-License-Identifier: MPL-2.0
use firelight::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        user_email: args.opt_value_from_str("--user").unwrap_or(None),
    };

    app::run(flags)
}
