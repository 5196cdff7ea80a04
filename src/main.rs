use anyhow::{Context, Result};
use canzoniere::catalog::Catalog;
use canzoniere::cli_style::{self, get_styles};
use canzoniere::config::{AppConfig, CliConfig, FileConfig};
use canzoniere::search::{SearchOutcome, SearchStrategy};
use canzoniere::sort::SortStrategy;
use canzoniere::store::CsvSongStore;
use clap::{CommandFactory, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustyline::{
    completion::Completer,
    highlight::Highlighter,
    history::FileHistory,
    validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the song library file. Defaults to songs.csv in the working
    /// directory; created on the first save if missing.
    #[clap(value_parser = parse_path)]
    pub library: Option<PathBuf>,

    /// Path to a TOML config file; its values override the CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the command history file.
    #[clap(long, value_parser = parse_path)]
    pub history: Option<PathBuf>,

    /// Seed for the random song generator, for reproducible runs.
    #[clap(long)]
    pub random_seed: Option<u64>,
}

#[derive(Parser)]
#[command(styles=get_styles(),name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Shows all songs in their current order.
    List,

    /// Adds a song to the catalog.
    Add {
        title: String,
        artist: String,
        album: String,
    },

    /// Adds the given number of randomly generated songs.
    Random { count: usize },

    /// Deletes the first song with the given title (exact match).
    Delete { title: String },

    /// Searches for a title with the chosen strategy.
    /// Interpolation and exponential need the catalog sorted first.
    Search {
        strategy: SearchStrategy,
        title: String,
    },

    /// Sorts the catalog ascending with the chosen strategy and
    /// reports how long the sort itself took.
    Sort { strategy: SortStrategy },

    /// Shows the path of the current library file.
    Where,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const PROMPT: &str = ">> ";

fn execute_command(
    line: String,
    catalog: &mut Catalog,
    rng: &mut StdRng,
    library_path: &str,
) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            println!("{} {}", PROMPT, &line);
            match cli.command {
                InnerCommand::List => {
                    if catalog.is_empty() {
                        println!("The catalog is empty.");
                    } else {
                        for (at, song) in catalog.list().iter().enumerate() {
                            cli_style::print_song_row(at + 1, song);
                        }
                    }
                }
                InnerCommand::Add {
                    title,
                    artist,
                    album,
                } => match catalog.add(title, artist, album) {
                    Ok(song) => cli_style::print_ok(&format!("'{}' added to the catalog.", song)),
                    Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                },
                InnerCommand::Random { count } => match catalog.add_random(count, rng) {
                    Ok(()) => cli_style::print_ok(&format!(
                        "{} random songs added, {} total.",
                        count,
                        catalog.len()
                    )),
                    Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                },
                InnerCommand::Delete { title } => match catalog.delete(&title) {
                    Ok(Some(song)) => {
                        cli_style::print_ok(&format!("'{}' removed from the catalog.", song))
                    }
                    Ok(None) => {
                        cli_style::print_miss(&format!("'{}' not found in the catalog.", title))
                    }
                    Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                },
                InnerCommand::Search { strategy, title } => {
                    if strategy.requires_sorted() && !catalog.is_sorted() {
                        return CommandExecutionResult::Error(format!(
                            "{:?} search needs the catalog sorted; run a sort command first.",
                            strategy
                        ));
                    }
                    match catalog.search(strategy, &title) {
                        SearchOutcome::Position(at) => cli_style::print_ok(&format!(
                            "'{}' found at position {}.",
                            catalog.list()[at],
                            at + 1
                        )),
                        SearchOutcome::Present => {
                            cli_style::print_ok(&format!("'{}' is in the catalog.", title))
                        }
                        SearchOutcome::Absent => {
                            cli_style::print_miss(&format!("'{}' not found in the catalog.", title))
                        }
                    }
                }
                InnerCommand::Sort { strategy } => {
                    let started = Instant::now();
                    match catalog.sort(strategy) {
                        Ok(()) => cli_style::print_ok(&format!(
                            "Sorted {} songs with {:?} sort in {:?}.",
                            catalog.len(),
                            strategy,
                            started.elapsed()
                        )),
                        Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                    }
                }
                InnerCommand::Where => {
                    println!("{}", library_path);
                }
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }

        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct ReplHelper {
    commands_names: Vec<String>,
}

impl ReplHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        ReplHelper { commands_names }
    }
}

impl Completer for ReplHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for ReplHelper {}
impl Validator for ReplHelper {}
impl Helper for ReplHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let config = AppConfig::resolve(
        &CliConfig {
            library_path: cli_args.library,
            history_path: cli_args.history,
            random_seed: cli_args.random_seed,
        },
        file_config,
    )?;

    info!("Opening song library at {:?}...", config.library_path);
    let store = CsvSongStore::new(&config.library_path);
    let mut catalog =
        Catalog::open(Box::new(store)).with_context(|| "Could not open the song library.")?;

    let mut rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    cli_style::print_banner("Canzoniere");
    InnerCli::command().print_long_help()?;

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<ReplHelper, FileHistory>::with_config(rl_config)?;

    let helper = ReplHelper::new();
    rl.set_helper(Some(helper));
    if let Some(history_path) = config.history_path.as_deref() {
        // First run has no history yet.
        let _ = rl.load_history(history_path);
    }

    let library_path = config.library_path.display().to_string();
    loop {
        let readline = rl.readline(PROMPT);

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &mut catalog, &mut rng, &library_path) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        eprintln!("Error: {:?}", err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }

    if let Some(history_path) = config.history_path.as_deref() {
        if let Err(err) = rl.save_history(history_path) {
            info!("Could not save history: {}", err);
        }
    }
    Ok(())
}
