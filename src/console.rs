//! Hot-seat terminal front-end.
//!
//! This is the display collaborator for the session layer: it resolves raw
//! input lines into typed intents, feeds them to a session pump, and prints
//! the render requests that come back. All game validation lives in the
//! session; this layer only parses.

use anyhow::{Context, Result};
use dropfour::{Disc, GameSession, Intent, Player, RenderRequest, SessionPump};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Runs a hot-seat game between two named players on stdin/stdout.
pub async fn run(first: String, second: String) -> Result<()> {
    let session = GameSession::new(
        Player::new(first.clone(), first.clone()),
        Player::new(second.clone(), second.clone()),
    )
    .context("creating game session")?;

    let initial = session.render();
    let mut to_move = initial.board().to_move();
    print_render(&initial);
    println!("enter a column (1-7), 'ff' to forfeit, 'quit' to exit");

    info!(%first, %second, "starting hot-seat game");
    let mut pump = SessionPump::spawn(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading input")? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        // The typed line belongs to whoever's turn it is; identity
        // resolution is this front-end's job, not the session's.
        let actor = match to_move {
            Disc::Red => first.clone(),
            Disc::Yellow => second.clone(),
        };
        let intent = if input.eq_ignore_ascii_case("ff") || input.eq_ignore_ascii_case("forfeit")
        {
            Intent::Forfeit { actor }
        } else if let Some(column) = parse_column(input) {
            Intent::Move { actor, column }
        } else {
            println!("enter a column (1-7), 'ff' to forfeit, 'quit' to exit");
            continue;
        };

        if !pump.submit(intent) {
            break;
        }
        let Some(render) = pump.recv().await else {
            break;
        };
        print_render(&render);
        if render.outcome().is_some() {
            break;
        }
        to_move = render.board().to_move();
    }

    Ok(())
}

/// Maps a 1-based column label to a 0-based index. Out-of-range labels are
/// passed through for the session to drop, matching the button surface the
/// session was designed against.
fn parse_column(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

fn print_render(render: &RenderRequest) {
    print!("{}", render.board());
    println!("{}", render.status());
}
