mod api;
mod config;
mod fetch;
mod input;
mod state;
mod ui;
mod wizard;

use std::{error::Error, io, sync::mpsc, time::Duration};

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use ratatui::{backend::CrosstermBackend, Terminal};

use clap::Parser;

use crate::{
    api::ApiClient,
    fetch::FetchEvent,
    state::{LogLevel, PendingAction, WizardState},
    ui::draw_ui,
};

#[derive(Parser)]
#[command(
    name = "applytui",
    version,
    about = "Step-by-step terminal wizard for applying to open positions."
)]
struct Cli {
    /// Base URL of the application service
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let base_url = config::resolve_base_url(cli.base_url)?;
    let api = ApiClient::new(base_url)?;

    run_tui(api)
}

fn run_tui(api: ApiClient) -> Result<(), Box<dyn Error>> {
    setup_terminal()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut state = WizardState::new();
    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchEvent>();

    state.push_log(
        LogLevel::Info,
        "Enter your email to fetch your candidate record.",
    );

    // the job list is fetched once, at wizard start
    wizard::start_jobs_fetch(&mut state, &api, &fetch_tx);

    loop {
        draw_ui(&mut terminal, &state)?;

        if event::poll(Duration::from_millis(120))? {
            let ev = event::read()?;
            input::handle_event(&mut state, ev);
        }

        if state.ui.should_exit {
            wizard::cancel_all(&mut state);
            break;
        }

        if let Some(action) = state.ui.pending_action.take() {
            match action {
                PendingAction::Lookup => wizard::start_lookup(&mut state, &api, &fetch_tx),
                PendingAction::Submit => wizard::start_submit(&mut state, &api, &fetch_tx),
            }
        }

        loop {
            match fetch_rx.try_recv() {
                Ok(event) => wizard::apply_event(&mut state, event),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }
    }

    teardown_terminal(&mut terminal)?;
    Ok(())
}

fn setup_terminal() -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn teardown_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
