// SPDX-License-Identifier: MPL-2.0
use matchday_prefs::app::{paths, Preferences};
use matchday_prefs::config;
use matchday_prefs::logging;
use matchday_prefs::notifications::{Notification, Severity};
use std::process::ExitCode;

const HELP: &str = "\
matchday-prefs: inspect and change dashboard preferences

USAGE:
  matchday-prefs [OPTIONS] <COMMAND> [ARGS]

OPTIONS:
  --data-dir <DIR>     Directory holding the preference storage
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

COMMANDS:
  locale               Print the active locale
  set-locale <TAG>     Switch locale (en, hu, or a regional tag such as en-US)
  toggle-locale        Switch to the other locale
  tr <KEY>...          Resolve translation keys in the active locale
  favorites            List favorite teams
  add <TEAM>           Add a favorite team
  remove <TEAM>        Remove a favorite team
  toggle <TEAM>        Add or remove a favorite team
  clear                Remove every favorite team
";

enum Command {
    Locale,
    SetLocale(String),
    ToggleLocale,
    Translate(Vec<String>),
    Favorites,
    Add(String),
    Remove(String),
    Toggle(String),
    Clear,
}

struct Args {
    data_dir: Option<String>,
    config_dir: Option<String>,
    command: Command,
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let data_dir = args
        .opt_value_from_str("--data-dir")
        .map_err(|e| e.to_string())?;
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let name = args
        .subcommand()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "missing command".to_string())?;

    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    // Team names may arrive unquoted, split over several arguments.
    let joined = || {
        let team = rest.join(" ");
        if team.trim().is_empty() {
            Err(format!("`{name}` needs an argument"))
        } else {
            Ok(team)
        }
    };

    let command = match name.as_str() {
        "locale" => Command::Locale,
        "set-locale" => Command::SetLocale(joined()?),
        "toggle-locale" => Command::ToggleLocale,
        "tr" if rest.is_empty() => return Err("`tr` needs at least one key".to_string()),
        "tr" => Command::Translate(rest.clone()),
        "favorites" => Command::Favorites,
        "add" => Command::Add(joined()?),
        "remove" => Command::Remove(joined()?),
        "toggle" => Command::Toggle(joined()?),
        "clear" => Command::Clear,
        other => return Err(format!("unknown command `{other}`")),
    };

    Ok(Some(Args {
        data_dir,
        config_dir,
        command,
    }))
}

fn print_notification(notification: Notification) {
    let marker = match notification.severity() {
        Severity::Normal => "*",
        Severity::Destructive => "!",
    };
    println!(
        "{} {}: {}",
        marker,
        notification.title(),
        notification.description()
    );
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let (config, warning) = config::load();
    logging::init(config.logging.filter.as_deref());
    if let Some(key) = warning {
        tracing::warn!(%key, "settings.toml ignored");
    }

    let mut prefs = Preferences::open(&config, Box::new(print_notification));
    prefs.load();

    match args.command {
        Command::Locale => println!("{}", prefs.locale.active_locale()),
        Command::SetLocale(tag) => match prefs.locale.set_active_locale_str(&tag) {
            Ok(locale) => println!("{locale}"),
            Err(error) => {
                eprintln!("error: {error}");
                return ExitCode::FAILURE;
            }
        },
        Command::ToggleLocale => println!("{}", prefs.locale.toggle_locale()),
        Command::Translate(keys) => {
            for key in &keys {
                println!("{}", prefs.locale.resolve(key));
            }
        }
        Command::Favorites => {
            if prefs.favorites.is_empty() {
                println!("{}", prefs.locale.resolve("favorites.empty"));
            }
            for (index, team) in prefs.favorites.favorites().iter().enumerate() {
                println!("{:>3}. {}", index + 1, team);
            }
        }
        Command::Add(team) => prefs.favorites.add_favorite(&team),
        Command::Remove(team) => prefs.favorites.remove_favorite(&team),
        Command::Toggle(team) => prefs.favorites.toggle_favorite(&team),
        Command::Clear => prefs.favorites.clear_favorites(),
    }

    ExitCode::SUCCESS
}
