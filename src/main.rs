use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use conduit::adapters::{FileStore, ReqwestHttpClient};
use conduit::api::ApiClient;
use conduit::app::{App, AppMessage};
use conduit::auth::{self, Session};
use conduit::cli::{parse_args, run_cli_command, version::USAGE, CliCommand};
use conduit::config::AppConfig;
use conduit::context::AppContext;
use conduit::logging;
use conduit::routes::Route;
use conduit::terminal::{setup_panic_hook, TerminalManager};
use conduit::ui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let mut config = AppConfig::from_env();
    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };
    if let Some(api_root) = options.api_root {
        config = config.with_api_root(api_root);
    }
    let initial_route = options.initial_route.unwrap_or(Route::Home);

    let log_path = logging::init(&config.log_path())
        .wrap_err_with(|| format!("cannot open log file {}", config.log_path().display()))?;
    tracing::info!(
        "conduit {} starting against {} (log: {})",
        conduit::cli::VERSION,
        config.api_root,
        log_path.display()
    );

    let store = Arc::new(FileStore::in_dir(&config.data_dir));
    let session = Session::restore(store);
    let api = ApiClient::new(Arc::new(ReqwestHttpClient::new()), session, config.api_root.clone());
    let ctx = AppContext::new(api);

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_tui(ctx, initial_route));

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:?}", e);
    }
    tracing::info!("conduit stopped");
    result
}

async fn run_tui(ctx: AppContext, initial_route: Route) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let startup = ctx.clone();
    tokio::spawn(async move { auth::load_current_user(&startup).await });

    let mut app = App::new(ctx);
    app.start(initial_route);
    let result = run_app(manager.terminal(), &mut app).await;
    app.shutdown();
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e).wrap_err("reading terminal events");
                    }
                    None => return Ok(()),
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
            return Ok(());
        }
    }
}
