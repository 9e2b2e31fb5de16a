pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, cli).await;
    shutdown_terminal(&mut terminal)?;
    result
}

/// Funnels keyboard input and app events into one stream, redrawing after
/// every handled event until the state machine reaches `Quit`.
async fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(&cli);

    tx.send(AppEvent::Bootstrap).await?;

    loop {
        let next = tokio::select! {
            maybe_input = input_stream.next() => maybe_input.map(AppEvent::Input),
            maybe_event = rx.recv() => maybe_event,
        };
        if let Some(event) = next {
            app.handle_event(event, &tx, &cli).await?;
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            return Ok(());
        }
    }
}

/// Raw-mode setup plus a panic hook that restores the screen first, so a
/// crash never strands the user in the alternate buffer.
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        previous_hook(panic);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn shutdown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
