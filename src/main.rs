mod app;
mod config;
mod error;
mod event;
mod form;
mod github;
mod ui;
mod validate;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::{client, types::LookupResult};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "hublook", about = "TUI form for GitHub user and repo lookups")]
struct Cli {
    #[arg(long, help = "Override the GitHub API base URL")]
    api_base: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.api_base);

    let http = client::build_client(config.github_token.as_deref())?;
    let reset_delay = Duration::from_secs(config.reset_delay_secs);
    let mut app = App::new(config);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    let input_handle = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if let Some(url) = app.take_pending_fetch() {
            let tx = tx.clone();
            let http = http.clone();
            tokio::spawn(async move {
                let outcome = match client::request(&http, &url).await {
                    Ok(value) => LookupResult::from_value(value),
                    Err(e) => Err(e),
                };
                let _ = tx.send(AppEvent::FetchDone(outcome));
            });
        }

        // One timer per completed lookup; firing is idempotent, so overlapping
        // submissions just let the last timer win.
        if app.take_pending_reset() {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(reset_delay).await;
                let _ = tx.send(AppEvent::ResetTimer);
            });
        }

        if app.should_quit {
            break;
        }
    }

    input_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
