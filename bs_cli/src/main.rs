//! Command line front end for tournament bracket schemas.
//!
//! Without `--players` the program runs an interactive menu; with it, one
//! request is processed and printed.

use anyhow::{Context, Result, bail};
use bracket_schema::{Settings, TournamentProcessor};
use bs_cli::{
    console::{Console, PlainConsole, TerminalConsole},
    menu,
    session::Session,
};
use crossterm::{execute, style::ResetColor};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use std::{io, path::PathBuf};

const HELP: &str = "\
Resolve tournament bracket schemas and group qualification

USAGE:
  bs_cli [OPTIONS]

OPTIONS:
  --config PATH         Configuration index  [default: env BRACKET_INDEX_PATH or config.json]
  --schema-root DIR     Schema directory     [default: env BRACKET_SCHEMA_ROOT or schema/]
  --players N           Total number of players (skips the menu)
  --group N             Group size (required with --players)
  --round N             Round to compute advancing players for
  --ranking LIST        Final group standing, best first, comma separated

FLAGS:
  --json                Print results as JSON
  --no-color            Do not change terminal colours or title
  -h, --help            Print help information

ENVIRONMENT:
  RUST_LOG              Log filter [default: warn]
";

struct Args {
    index_path: Option<PathBuf>,
    schema_root: Option<PathBuf>,
    players: Option<u32>,
    group: Option<u32>,
    round: Option<u32>,
    ranking: Option<String>,
    json: bool,
    no_color: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        index_path: pargs.opt_value_from_str("--config")?,
        schema_root: pargs.opt_value_from_str("--schema-root")?,
        players: pargs.opt_value_from_fn("--players", menu::parse_count)?,
        group: pargs.opt_value_from_fn("--group", menu::parse_count)?,
        round: pargs.opt_value_from_fn("--round", menu::parse_count)?,
        ranking: pargs.opt_value_from_str("--ranking")?,
        json: pargs.contains("--json"),
        no_color: pargs.contains("--no-color"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    // Catching signals for exit, leaving the terminal colours as we found them.
    set_handler(|| {
        let _ = execute!(io::stdout(), ResetColor);
        std::process::exit(0)
    })?;

    let settings = Settings::from_env(args.index_path.clone(), args.schema_root.clone());
    settings.validate()?;
    info!(
        "Using index {} with schema root {}",
        settings.index_path.display(),
        settings.schema_root.display()
    );

    let processor = TournamentProcessor::new(settings);

    match args.players {
        Some(players) => run_once(&processor, players, &args),
        None => {
            let console: Box<dyn Console> = if args.no_color {
                Box::new(PlainConsole)
            } else {
                Box::new(TerminalConsole)
            };
            let stdin = io::stdin();
            Session::new(processor, stdin.lock(), io::stdout(), console)
                .with_json(args.json)
                .run()
        }
    }
}

fn run_once(processor: &TournamentProcessor, players: u32, args: &Args) -> Result<()> {
    let group = args.group.context("--group is required with --players")?;

    let outcome = match (args.round, &args.ranking) {
        (Some(round), Some(ranking)) => {
            let ranking = menu::parse_ranking(ranking)?;
            processor
                .advance(players, group, round, &ranking)
                .map(|advancement| render(&advancement, args.json))
        }
        (None, None) => processor
            .process_tournament(players, group)
            .map(|report| render(&report, args.json)),
        _ => bail!("--round and --ranking must be given together"),
    };

    match outcome {
        Ok(text) => {
            print!("{}", text?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn render<T>(value: &T, json: bool) -> Result<String>
where
    T: serde::Serialize + std::fmt::Display,
{
    if json {
        let mut text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(value.to_string())
    }
}
