// SPDX-License-Identifier: MPL-2.0
use logi_portal::app::{self, paths, Flags};

const HELP: &str = "\
LogiPortal - logistics management portal

USAGE:
  logi_portal [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (en-US, nl, de, fr)
      --config-dir <DIR>   Directory holding settings.toml
";

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: parse_option(&mut args, "--lang"),
        config_dir: parse_option(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(option = name, %error, "invalid command-line option");
            None
        }
    }
}
