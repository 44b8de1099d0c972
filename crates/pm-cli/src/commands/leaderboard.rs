use colored::Colorize;

use pm_game::GameConfig;
use pm_store::{CredentialStore, Leaderboard};

pub fn run(config: GameConfig, top: usize) -> Result<(), String> {
    let store = CredentialStore::new(config.accounts_path());
    let board = Leaderboard::load(&store).map_err(|e| e.to_string())?;

    println!("  {}", "Leaderboard".bold());
    super::print_leaderboard(board.top(top));
    Ok(())
}
