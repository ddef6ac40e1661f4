use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use healthdesk::app::{App, AppMessage};
use healthdesk::cli::{parse_args, run_cli_command, VERSION};
use healthdesk::config::AppConfig;
use healthdesk::logging::init_logging;
use healthdesk::terminal::{setup_panic_hook, TerminalManager};
use healthdesk::ui;

/// Animation tick; 300 of these make one service probe interval.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    color_eyre::install()?;
    let log_path = init_logging();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let config = AppConfig::from_env();
    info!(
        "healthdesk {} starting ({}, api {}, log {:?})",
        VERSION, config.build_mode.label(), config.base_url, log_path
    );

    runtime.block_on(async {
        let mut app = App::new(&config);
        app.start(command.start_route());

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}
