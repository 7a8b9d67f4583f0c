use postboard::app::{App, AppMessage};
use postboard::cli::{parse_args, CliCommand, USAGE, VERSION};
use postboard::input::CommandRegistry;
use postboard::loader::PostsApi;
use postboard::startup::{init_logging, AppConfig};
use postboard::terminal::{setup_panic_hook, TerminalManager};
use postboard::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Arguments are handled before any terminal setup
    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("postboard {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::RunTui(overrides)) => overrides,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    color_eyre::install()?;

    let config = AppConfig::from_env()?.apply_overrides(overrides);
    config.validate()?;

    let log_path = init_logging(&config);
    tracing::info!(
        "postboard {} starting (endpoint {}, log {:?})",
        VERSION,
        config.endpoint,
        log_path
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut term_manager = TerminalManager::new()?;
    let terminal = term_manager.terminal();
    let size = terminal.size()?;

    let result = runtime.block_on(async {
        let mut app = App::new(PostsApi::new(config.endpoint.clone()), config.theme);
        app.update_terminal_dimensions(size.width, size.height);
        app.mount();
        run_app(terminal, &mut app).await
    });

    term_manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Application error: {:?}", e);
    }
    tracing::info!("postboard exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = registry.dispatch(key, &app.input_context()) {
                            app.execute_command(command);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    // Input stream closed
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    // All senders gone; nothing more will arrive
                    None => message_rx = None,
                }
            }
        }
    }
}
