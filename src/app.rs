use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::{Handler as TerminalEventHandler, Next};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use tui_logger::{init_logger, set_default_level};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Info).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(Theme::default);
        let mut app = App {
            state: State::new(theme),
            config,
        };
        app.start_ui()?;

        // Save config on exit so a theme switched at runtime sticks
        app.config.theme_name = app.state.get_theme().name.clone();
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        // The render loop is the store's subscriber: mutations set the
        // redraw flag, so ticks without changes skip drawing. The
        // subscription is removed again before teardown.
        let redraw = Rc::new(Cell::new(true));
        let subscription = {
            let redraw = Rc::clone(&redraw);
            self.state.store_mut().subscribe(move |_| redraw.set(true))
        };

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            if redraw.replace(false) {
                terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            }
            match terminal_event_handler.handle_next(&mut self.state)? {
                Next::Redraw => redraw.set(true),
                Next::Tick => (),
                Next::Exit => {
                    debug!("Received application exit request.");
                    break;
                }
            }
        }
        self.state.store_mut().unsubscribe(subscription);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
