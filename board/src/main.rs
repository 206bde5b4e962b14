//! Terminal frontend for the bulletin board.
//!
//! Mounts a `Board` against the configured backend, prints the rendered view
//! after every command and asks on stdin before deleting anything. Logs go to
//! stderr so they never interleave with the view.

mod commands;
mod transport;

use std::io::{self, BufRead, Write};

use board_core::{Board, ClientState, Confirm, PostId, PostsClient, Transport, View};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::{Command, HELP};
use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "board", about = "Minimal bulletin board client")]
struct Cli {
    /// Base URL of the posts backend.
    #[arg(long, env = "BOARD_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Yes/no prompt on stdin. Anything but `y`/`yes` declines.
fn prompt_confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Look a post up by the id the user typed, as displayed in the view.
fn lookup(board: &Board<impl Transport, impl Confirm>, typed: &str) -> Option<(PostId, String)> {
    board
        .state()
        .posts
        .iter()
        .find(|p| p.id.to_string() == typed)
        .map(|p| (p.id.clone(), p.text.clone()))
}

/// Request-issuing commands wait until the current request has settled.
fn refused_while_busy(command: &Command, state: &ClientState) -> bool {
    command.needs_idle() && state.loading
}

/// Apply one command. Returns `false` when the user asked to quit.
fn dispatch(board: &mut Board<impl Transport, impl Confirm>, command: Command) -> bool {
    if refused_while_busy(&command, board.state()) {
        println!("busy, try again in a moment");
        return true;
    }

    match command {
        Command::Compose(text) => board.set_compose_text(text),
        Command::Post => board.submit_compose(),
        Command::Edit(typed) => match lookup(board, &typed) {
            Some((id, text)) => board.begin_edit(id, text),
            None => println!("no post with id {typed}"),
        },
        Command::Text(text) => {
            if board.state().editing_id.is_none() {
                println!("not editing anything, use `edit <id>` first");
            } else {
                board.set_editing_text(text);
            }
        }
        Command::Save => board.commit_edit(),
        Command::Cancel => board.cancel_edit(),
        Command::Delete(typed) => match lookup(board, &typed) {
            Some((id, _)) => board.remove(&id),
            None => println!("no post with id {typed}"),
        },
        Command::Refresh => board.refresh(),
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }
    true
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    tracing::info!(url = %cli.url, "mounting board");

    let mut board = Board::mount(PostsClient::new(&cli.url), UreqTransport::new(), prompt_confirm);

    let stdin = io::stdin();
    loop {
        print!("{}\n> ", View(board.state()));
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
        }

        match commands::parse(&line) {
            Ok(command) => {
                if !dispatch(&mut board, command) {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    let state = board.unmount();
    tracing::debug!(posts = state.posts.len(), "board unmounted");
}
