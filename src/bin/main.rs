use a11y_canon::config::{Settings, load_settings};
use a11y_canon::events::emit_all;
use a11y_canon::language::ResolveOutcome;
use a11y_canon::role::{RoleNormalizer, RoleSourceValue, aria_vocabulary};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

/// Normalize accessibility roles and resolve speech synthesizer languages
#[derive(Parser)]
#[command(name = "a11y-canon")]
#[command(version)]
#[command(about = "Normalize accessibility roles and resolve speech synthesizer languages")]
struct Cli {
    /// Config file layered over the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an ARIA role name or numeric platform role id
    Role {
        /// Role name or digits; omit for an absent role
        value: Option<String>,
    },
    /// Canonical role implied by an HTML element name
    Html {
        /// Element name (e.g., header, nav, section)
        element: String,
    },
    /// Canonical state for an aria-sort value
    Sort {
        /// ascending, descending, other or none
        value: String,
    },
    /// Resolve a language to one the synthesizer can speak
    Lang {
        /// Requested language (e.g., fr_FR, en-gb); omit for the current language
        tag: Option<String>,

        #[command(flatten)]
        speech: SpeechArgs,
    },
    /// Check the default language map against the available languages
    CheckDefaults {
        #[command(flatten)]
        speech: SpeechArgs,
    },
}

#[derive(Args)]
struct SpeechArgs {
    /// Available languages, comma separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    available: Option<Vec<String>>,

    /// Default language mapping as KEY=TAG (repeatable)
    #[arg(long = "default", value_parser = parse_key_value)]
    defaults: Vec<(String, String)>,

    /// Key used when no language is requested
    #[arg(long)]
    current: Option<String>,
}

impl SpeechArgs {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(available) = self.available {
            settings.speech.available_languages = Some(available);
        }
        settings.speech.default_language_map.extend(self.defaults);
        if let Some(current) = self.current {
            settings.speech.language = Some(current);
        }
        settings
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .ok_or_else(|| format!("expected KEY=TAG, got '{}'", raw))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = load_settings(cli.config.as_deref());
    emit_all(&outcome.events, "a11y_canon::config");

    match run(cli.command, outcome.settings, cli.json) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, settings: Settings, json: bool) -> Result<ExitCode, String> {
    match command {
        Commands::Role { value } => {
            let platform = settings.platform_role_table().map_err(|e| e.to_string())?;
            let normalizer = RoleNormalizer::with_tables(aria_vocabulary(), platform);
            let role = normalizer.normalize(RoleSourceValue::from(value.clone()));
            if json {
                println!("{}", json!({ "input": value, "role": role }));
            } else {
                println!("{}", role);
            }
        }
        Commands::Html { element } => {
            let role = RoleNormalizer::new().role_for_html_element(&element);
            if json {
                println!("{}", json!({ "element": element, "role": role }));
            } else {
                println!("{}", role);
            }
        }
        Commands::Sort { value } => {
            let state = RoleNormalizer::new().sort_state(&value);
            if json {
                println!("{}", json!({ "value": value, "state": state }));
            } else {
                match state {
                    Some(state) => println!("{}", state),
                    None => println!("none"),
                }
            }
        }
        Commands::Lang { tag, speech } => {
            let settings = speech.apply(settings);
            let resolver = settings.language_resolver().map_err(|e| e.to_string())?;
            let outcome = resolver.resolve_with_events(tag.as_deref());
            emit_all(&outcome.events, "a11y_canon::language");
            print_resolution(tag.as_deref(), &outcome, json);
        }
        Commands::CheckDefaults { speech } => {
            let settings = speech.apply(settings);
            let resolver = settings.language_resolver().map_err(|e| e.to_string())?;
            let errors = resolver
                .defaults()
                .validate(resolver.available())
                .err()
                .unwrap_or_default();
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            let valid = messages.is_empty();
            if json {
                println!("{}", json!({ "valid": valid, "errors": &messages }));
            } else if valid {
                println!("ok");
            } else {
                for message in &messages {
                    println!("{}", message);
                }
            }
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_resolution(requested: Option<&str>, outcome: &ResolveOutcome, json: bool) {
    if json {
        let (tag, tier) = match &outcome.resolution {
            Some(resolution) => (
                Some(resolution.tag.to_string()),
                Some(resolution.tier.as_str()),
            ),
            None => (None, None),
        };
        println!(
            "{}",
            json!({ "requested": requested, "tag": tag, "tier": tier })
        );
        return;
    }

    match &outcome.resolution {
        Some(resolution) => println!("{} ({})", resolution.tag, resolution.tier),
        None => println!("none"),
    }
}
