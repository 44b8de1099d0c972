use std::io::{self, BufRead};

use colored::Colorize;

use pm_game::{Campaign, GameConfig, GameSession, narrative};

use super::{print_leaderboard, print_reply, read_line, typewrite};

const TITLE: &str = "\n   THE POIROT MYSTERY\n   A murder at the mansion awaits its detective.\n";

/// Register/login choices offered before giving up.
const SIGN_IN_TRIES: usize = 3;

pub fn run(config: GameConfig) -> Result<(), String> {
    let delay = config.reveal_delay_ms;
    let mut campaign = Campaign::new(config);

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    typewrite(TITLE, delay)?;
    println!("{}\n", narrative::WELCOME);
    if !sign_in(&mut campaign, &mut reader)? {
        return Err("could not sign in".into());
    }

    let start = campaign.start_session().map_err(|e| e.to_string())?;
    if let Some(notice) = &start.notice {
        println!("{}", notice.yellow());
    }
    let mut session = start.session;

    investigate(&mut session, &mut reader, delay)?;
    if !session.is_over() {
        println!(
            "{}",
            "The investigation was abandoned. Progress was not saved.".yellow()
        );
        return Ok(());
    }

    let done = campaign.conclude(&session).map_err(|e| e.to_string())?;
    println!(
        "  Session log written to {}",
        done.log_path.display().to_string().dimmed()
    );

    let board = campaign.leaderboard().map_err(|e| e.to_string())?;
    println!("\n  {}", "Leaderboard".bold());
    print_leaderboard(board.top(pm_store::DEFAULT_TOP));
    Ok(())
}

/// Returns whether a player is signed in.
fn sign_in(campaign: &mut Campaign, reader: &mut impl BufRead) -> Result<bool, String> {
    for _ in 0..SIGN_IN_TRIES {
        let Some(choice) = read_line(reader, "Press R to register or L to login: ")? else {
            return Ok(false);
        };
        let register = match choice.to_lowercase().as_str() {
            "r" => true,
            "l" => false,
            _ => {
                println!("{}", "Invalid choice. Please enter R or L.".yellow());
                continue;
            }
        };

        let Some(username) = read_line(reader, "Enter your username: ")? else {
            return Ok(false);
        };
        if username.is_empty() {
            println!("{}", "The username cannot be empty.".yellow());
            continue;
        }
        let Some(password) = read_line(reader, "Enter your password: ")? else {
            return Ok(false);
        };

        if register {
            if campaign
                .register(&username, &password)
                .map_err(|e| e.to_string())?
            {
                println!("Registration successful. Welcome, {username}!");
                return Ok(true);
            }
            println!("{}", "That username is already taken.".yellow());
            continue;
        }

        let signed_in = campaign
            .login(&username, &password, |left| {
                println!(
                    "{}",
                    format!("Incorrect password,{left} attempts left, try again").yellow()
                );
                read_line(reader, "Enter your password: ").ok().flatten()
            })
            .map_err(|e| e.to_string())?;
        if signed_in {
            println!("Login successful. Welcome back, {username}!");
            return Ok(true);
        }
        println!("{}", "Login failed.".yellow());
    }
    Ok(false)
}

/// Feed lines to the session until it ends or input runs out.
fn investigate(
    session: &mut GameSession,
    reader: &mut impl BufRead,
    delay: u64,
) -> Result<(), String> {
    while !session.is_over() {
        let Some(input) = read_line(reader, &session.prompt())? else {
            break;
        };
        match session.process(&input) {
            Ok(reply) => print_reply(&reply, delay)?,
            Err(e) => {
                tracing::debug!(error = %e, "turn rejected");
                println!("{}", e.to_string().yellow());
            }
        }
    }
    Ok(())
}
