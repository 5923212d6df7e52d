use std::time::Duration;

use anyhow::Result;
use crossterm::{event::{self, DisableMouseCapture, EnableMouseCapture, Event}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use todo_tabs::{
    application::{dispatcher::Dispatcher, messages::{Completion, Dispatch}, todo_app::TodoApp},
    domain::remote::TodoApi,
    infrastructure::{config::Config, logging, sqlite_api::{prepare_sqlite_file, SqliteTodoApi}},
    tui::{input::action_for, render, Step, Ui},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_file(config.log_filter.as_deref(), &config.log_file)?;

    prepare_sqlite_file(&config.database_url)?;
    let api = SqliteTodoApi::connect(&config.database_url).await?;
    api.init().await?;
    let (dispatcher, completions) = Dispatcher::new(api);
    tracing::info!(database_url = %config.database_url, "starting terminal client");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, dispatcher, completions);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run_app<A: TodoApi>(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, dispatcher: Dispatcher<A>, mut completions: UnboundedReceiver<Completion>) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut ui = Ui::new(TodoApp::default());
    dispatcher.dispatch(ui.app.start());

    loop {
        while let Ok(completion) = completions.try_recv() {
            send(&dispatcher, ui.complete(completion));
        }

        terminal.draw(|f| render::draw(f, &ui))?;

        if !event::poll(tick_rate)? { continue; }
        let Event::Key(key) = event::read()? else { continue };
        let Some(action) = action_for(ui.mode, key) else { continue };
        match ui.handle(action) {
            Step::Quit => break,
            Step::Continue(dispatch) => send(&dispatcher, dispatch),
        }
    }
    tracing::info!("terminal client exiting");
    Ok(())
}

fn send<A: TodoApi>(dispatcher: &Dispatcher<A>, dispatch: Option<Dispatch>) {
    if let Some(dispatch) = dispatch { dispatcher.dispatch(dispatch); }
}
