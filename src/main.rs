// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_snackbar [OPTIONS]

Options:
  --message <TEXT>   Text shown in the snackbar (default: Saved)
  --delay <SECS>     Auto-dismiss delay in seconds
  --theme <MODE>     light, dark or system
  --config <PATH>    Settings file to load instead of the default one
  -h, --help         Print this help";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        message: args.opt_value_from_str("--message")?,
        delay_secs: args.opt_value_from_str("--delay")?,
        theme: args.opt_value_from_str("--theme")?,
        config_path: args.opt_value_from_str("--config")?,
    })
}

fn main() -> iced::Result {
    if std::env::args().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_snackbar=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
