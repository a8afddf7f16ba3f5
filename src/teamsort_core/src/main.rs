// teamsort command line.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use teamsort_core::report::{render_draw, render_roster};
use teamsort_core::{
    draw_teams, logging, parse_players, validate_team_count, Config, DrawRequest, JsonFileStore,
    RandomShuffler, Roster,
};

#[derive(Debug, Parser)]
#[command(name = "teamsort", about = "Sort a player roster into level-balanced teams")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster file, overrides the config
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add players from `Name - Level` lines (file or stdin)
    Add { file: Option<PathBuf> },
    /// Show the roster
    List,
    /// Change a player's name or level
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,
    },
    /// Enable or disable a player
    Toggle { id: String },
    /// Remove a player
    Delete { id: String },
    /// Remove every player
    Clear,
    /// Draw teams from the enabled players
    Draw {
        #[arg(short, long, allow_negative_numbers = true)]
        teams: Option<i64>,
        #[arg(short, long)]
        max_size: Option<usize>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.log_level);

    let roster_path = cli.roster.clone().unwrap_or_else(|| config.resolved_roster_path());
    debug!(path = %roster_path.display(), "using roster file");
    let mut roster = Roster::new(JsonFileStore::new(roster_path));

    match cli.command {
        Command::Add { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let mut shuffler = RandomShuffler::new();
            let players = parse_players(&text, shuffler.rng());
            let count = players.len();
            roster.add_players(players).context("failed to save roster")?;
            println!("Added {count} players");
        }
        Command::List => {
            let players = roster.players().context("failed to load roster")?;
            print!("{}", render_roster(&players));
        }
        Command::Edit { id, name, level } => {
            if name.is_none() && level.is_none() {
                bail!("nothing to edit: pass --name and/or --level");
            }
            if let Some(name) = name {
                roster.rename_player(&id, &name)?;
            }
            if let Some(level) = level {
                roster.set_level(&id, level)?;
            }
            info!(id = %id, "player edited");
        }
        Command::Toggle { id } => {
            let player = roster.toggle_enabled(&id)?;
            let state = if player.enabled { "enabled" } else { "disabled" };
            println!("{} {}", player.name, state);
        }
        Command::Delete { id } => {
            let player = roster.delete_player(&id)?;
            println!("Deleted {}", player.name);
        }
        Command::Clear => {
            roster.clear()?;
            println!("Roster cleared");
        }
        Command::Draw {
            teams,
            max_size,
            seed,
        } => {
            let num_teams = match teams {
                Some(n) => validate_team_count(n)?,
                None => config.default_teams,
            };
            let request = DrawRequest {
                num_teams,
                max_team_size: max_size.or(config.default_max_team_size),
            };
            let players = roster.players().context("failed to load roster")?;
            let draw = draw_teams(&players, request, &mut RandomShuffler::from_seed(seed))?;
            print!("{}", render_draw(&draw));
        }
    }

    Ok(())
}
