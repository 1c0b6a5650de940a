use std::env;
use std::fs::File;
use std::io;

use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

use crate::app::app::App;
use crate::app::screen::CurrentScreen;
use crate::app::ui;
use crate::print::SystemSpooler;

mod app;
mod document;
mod print;
mod types;

const LOG_FILE_ENV: &str = "KONTRAKT_LOG";

fn main() -> Result<(), std::io::Error> {
    init_logging()?;

    let spooler = SystemSpooler::from_env();
    let mut app = App::new(Box::new(spooler));
    init_and_run_app(&mut app)?;

    Ok(())
}

// a full-screen app owns the terminal, so logging is opt-in through RUST_LOG
// and goes to a file instead of stderr
fn init_logging() -> io::Result<()> {
    if env::var("RUST_LOG").is_err() {
        return Ok(());
    }
    let path = env::var(LOG_FILE_ENV).unwrap_or_else(|_| String::from("./kontrakt.log"));
    let log_file = File::create(&path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    info!("logging to {}", path);
    Ok(())
}

fn init_and_run_app(app: &mut App) -> io::Result<bool> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app)?;

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(res)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<bool> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                // Skip events that are not KeyEventKind::Press
                continue;
            }
            match app.current_screen {
                CurrentScreen::Editing => match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                        return Ok(true)
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('p') | KeyCode::Char('P')) => {
                        app.trigger_print();
                    }
                    (_, KeyCode::Esc) => {
                        app.toggle_editing();
                    }
                    (_, KeyCode::Tab | KeyCode::Down) => {
                        app.advance_field();
                    }
                    (_, KeyCode::BackTab | KeyCode::Up) => {
                        app.retreat_field();
                    }
                    (_, KeyCode::Right) => {
                        app.advance_side();
                    }
                    (_, KeyCode::Left) => {
                        app.retreat_side();
                    }
                    (_, KeyCode::Backspace) => {
                        app.pop_input();
                    }
                    (_, KeyCode::Char(value)) => {
                        app.push_input(value);
                    }
                    _ => {}
                },
                CurrentScreen::Viewing => match (key.modifiers, key.code) {
                    (_, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                        return Ok(true)
                    }
                    (_, KeyCode::Char('e')) => {
                        app.toggle_editing();
                    }
                    (_, KeyCode::Char('p')) => {
                        app.trigger_print();
                    }
                    _ => {}
                },
            }
        }
    }
}
