use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tabpal::app::{
    r#loop::{run_loop, SnapshotSink},
    state::{AppState, PaletteSession},
};
use tabpal::config::{config_dir, PaletteConfig};
use tabpal::infrastructure::fixture_gateway::FixtureGateway;

const VISIBLE_ROWS: usize = 15;

/// Dumps the session as plain lines.
struct PlainSink {
    out: Stdout,
}

impl SnapshotSink for PlainSink {
    fn render(&mut self, session: &PaletteSession) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        if !session.open {
            queue!(self.out, Print("palette closed (toggle to open)"))?;
            self.out.flush()?;
            return Ok(());
        }

        let mut lines = vec![format!("[{}] > {}", session.mode, session.query)];
        if session.loading {
            lines.push("loading...".to_string());
        }
        let start = session.selected_index.saturating_sub(VISIBLE_ROWS - 1);
        for (i, result) in session
            .results
            .iter()
            .enumerate()
            .skip(start)
            .take(VISIBLE_ROWS)
        {
            let marker = if i == session.selected_index { '>' } else { ' ' };
            let detail = result.item.domain.as_deref().unwrap_or_default();
            lines.push(format!("{marker} {}  {detail}", result.item.title));
        }
        let (shown, total) = session.counts();
        lines.push(format!("{shown}/{total}"));

        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn fixture_path() -> Result<PathBuf> {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config_dir().map(|dir| dir.join("fixture.toml")))
        .context("No fixture path given and no home directory found")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let _log_guard = tabpal::logging::init();

    // Load everything before touching the terminal so errors print normally.
    let config = PaletteConfig::load();
    let gateway = Arc::new(FixtureGateway::load(&fixture_path()?)?);
    let app_state = AppState::new(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut sink = PlainSink { out: stdout };

    let res = run_loop(&mut sink, app_state, gateway.clone()).await;

    disable_raw_mode()?;
    execute!(sink.out, LeaveAlternateScreen)?;

    if let Err(err) = res {
        println!("{:?}", err);
    }
    for request in gateway.executed().await {
        println!("executed {} -> {:?}", request.operation, request.target);
    }

    Ok(())
}
