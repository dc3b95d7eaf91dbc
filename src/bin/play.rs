use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use tile_merge::{
    parse_command, BoardConfig, Command, Game, JsonFileStore, Session, TextPresenter,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play the tile merging puzzle in a terminal")]
struct Cli {
    /// Seed for tile spawns (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// File holding the best score
    #[arg(long, value_name = "FILE", default_value = "best-score.json")]
    best_file: PathBuf,

    /// Board rows
    #[arg(long, value_name = "N", default_value_t = 4)]
    rows: usize,

    /// Board columns
    #[arg(long, value_name = "N", default_value_t = 4)]
    columns: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = BoardConfig::new(cli.rows, cli.columns);
    let session = Session::new(config, seed)?;
    let presenter = TextPresenter::new(cli.rows, cli.columns);
    let mut game = Game::new(session, JsonFileStore::new(cli.best_file), presenter);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "w/a/s/d or h/j/k/l to move, n to restart, q to quit")?;
    write!(stdout, "{}", game.presenter().render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match parse_command(&line?) {
            Some(Command::Move(dir)) => {
                game.handle_move(dir);
            }
            Some(Command::Restart) => game.restart(),
            Some(Command::Quit) => break,
            None => continue,
        }
        write!(stdout, "{}", game.presenter().render())?;
        stdout.flush()?;
    }

    game.end_session();
    info!(
        "final score {}, best {}",
        game.session().score(),
        game.best_score()
    );
    Ok(())
}
