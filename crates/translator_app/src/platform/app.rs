use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use client_logging::client_info;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use translator_core::{update, AppState, Msg};
use url::Url;

use super::cli::Cli;
use super::config::{self, ClientConfig};
use super::effects::EffectRunner;
use super::ui::render::HitMap;
use super::{input, logging, persistence, ui};

/// Longest wait for terminal input before engine results and timers are checked.
const MAX_IDLE: Duration = Duration::from_millis(50);

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;
    logging::initialize(&config, cli.log_level.as_deref());

    let start = cli.start_location();
    let server = resolve_server(&cli, start.server, &config)?;
    client_info!("Using translation server {}", server);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(
        config.client_settings(server),
        config.download_dir.clone(),
        msg_tx,
    )?;

    let fragment = start
        .fragment
        .or_else(|| persistence::load_last_location(&config.download_dir));
    let locale = config.locale.clone().or_else(config::environment_locale);
    let started = Msg::Started { fragment, locale };

    let mut terminal = setup_terminal()?;
    let result = event_loop(
        &mut terminal,
        &mut runner,
        &msg_rx,
        started,
        &config.download_dir,
    );
    restore_terminal(&mut terminal)?;
    result
}

/// `--server`/env first, then the start URL, then the config file.
fn resolve_server(cli: &Cli, from_location: Option<Url>, config: &ClientConfig) -> anyhow::Result<Url> {
    if let Some(raw) = cli.server.as_deref() {
        return Ok(Url::parse(raw)?);
    }
    match from_location {
        Some(url) => Ok(url),
        None => Ok(config.server_url()?),
    }
}

fn setup_terminal() -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut AppTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}

fn event_loop(
    terminal: &mut AppTerminal,
    runner: &mut EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
    started: Msg,
    state_dir: &Path,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut view = state.view();
    let mut hits = HitMap::default();
    let mut inbox = VecDeque::from([started]);
    let mut needs_draw = true;

    loop {
        inbox.extend(msg_rx.try_iter());
        inbox.extend(runner.due_messages(Instant::now()));

        let mut quit = false;
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            quit |= runner.run(effects, Instant::now());
        }
        if state.consume_dirty() {
            view = state.view();
            needs_draw = true;
        }

        if quit {
            persistence::save_last_location(state_dir, &view.location);
            client_info!("Shutting down on location {:?}", view.location);
            return Ok(());
        }

        if needs_draw {
            terminal.draw(|frame| hits = ui::render::render(frame, &view))?;
            needs_draw = false;
        }

        if event::poll(poll_timeout(runner.next_deadline(), Instant::now()))? {
            let event = event::read()?;
            if matches!(event, Event::Resize(..)) {
                needs_draw = true;
            }
            inbox.extend(input::map_event(&view, &hits, event));
        }
    }
}

fn poll_timeout(next_deadline: Option<Instant>, now: Instant) -> Duration {
    match next_deadline {
        Some(at) => at.saturating_duration_since(now).min(MAX_IDLE),
        None => MAX_IDLE,
    }
}
