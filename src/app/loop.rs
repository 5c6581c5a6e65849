use crate::app::{
    handler::{handle_command, DebounceTimer},
    input::map_event_to_action,
    reducer,
    state::{AppState, PaletteSession},
};
use crate::domain::gateway::DataSourceGateway;

use anyhow::Result;
use crossterm::event::{self, Event};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// The rendering collaborator. It only ever sees a read-only snapshot.
pub trait SnapshotSink {
    fn render(&mut self, session: &PaletteSession) -> Result<()>;
}

pub async fn run_loop<S: SnapshotSink>(
    sink: &mut S,
    app_state: AppState,
    gateway: Arc<dyn DataSourceGateway>,
) -> Result<AppState> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(sink, app_state, gateway, event_rx).await
}

pub async fn run_loop_with_events<S: SnapshotSink>(
    sink: &mut S,
    mut app_state: AppState,
    gateway: Arc<dyn DataSourceGateway>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut timer = DebounceTimer::default();

    loop {
        // --- 1. Render ---
        sink.render(&app_state.session)?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },

            // Async results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else { continue };
        let commands = reducer::update(&mut app_state, action);
        if app_state.should_quit {
            break;
        }
        for command in commands {
            handle_command(command, gateway.clone(), action_tx.clone(), &mut timer);
        }
    }

    timer.cancel();
    info!("Palette runtime stopped");
    Ok(app_state)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
