pub mod leaderboard;
pub mod play;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pm_game::{Reply, Tone};
use pm_store::LeaderboardEntry;

/// Reveal text one character at a time, in red.
fn typewrite(text: &str, delay_ms: u64) -> Result<(), String> {
    if delay_ms == 0 {
        println!("{}", text.red().bold());
        return Ok(());
    }
    let mut stdout = io::stdout();
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let piece: &str = c.encode_utf8(&mut buf);
        print!("{}", piece.red().bold());
        stdout.flush().map_err(|e| e.to_string())?;
        thread::sleep(Duration::from_millis(delay_ms));
    }
    println!();
    Ok(())
}

/// Print a game reply.
fn print_reply(reply: &Reply, delay_ms: u64) -> Result<(), String> {
    for segment in reply.segments() {
        match segment.tone {
            Tone::Plain => println!("{}", segment.text),
            Tone::Dramatic => typewrite(&segment.text, delay_ms)?,
        }
    }
    Ok(())
}

/// Print a prompt and read one trimmed line. `None` at end of input.
fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{}", prompt.green());
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None), // EOF
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("  No detectives on the board yet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Detective", "Score"]);
    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.name.clone(),
            entry.score.to_string(),
        ]);
    }
    println!("{table}");
}
