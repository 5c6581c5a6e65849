use crate::app::{action::Action, command::Command, modes::resolve_source};
use crate::domain::gateway::DataSourceGateway;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The session's single pending re-rank timer. Scheduling replaces the
/// previous timer; dropping the runtime cancels it.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    handle: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn schedule(&mut self, token: u64, delay: Duration, tx: mpsc::Sender<Action>) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::RerankDue(token)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn handle_command(
    command: Command,
    gateway: Arc<dyn DataSourceGateway>,
    tx: mpsc::Sender<Action>,
    timer: &mut DebounceTimer,
) {
    match command {
        Command::Fetch(ticket) => {
            tokio::spawn(async move {
                let source = resolve_source(ticket.mode);
                let items = match gateway.fetch(source).await {
                    Ok(items) => items,
                    Err(e) => {
                        warn!(error = %e, ?source, "Fetch failed, showing empty list");
                        Vec::new()
                    }
                };
                let _ = tx.send(Action::ItemsFetched(ticket, items)).await;
            });
        }
        Command::Execute(request) => {
            tokio::spawn(async move {
                let operation = request.operation.clone();
                if let Err(e) = gateway.execute(request).await {
                    warn!(error = %e, %operation, "Execute failed");
                }
            });
        }
        Command::ScheduleRerank { token, delay } => {
            timer.schedule(token, delay, tx);
        }
        Command::CancelRerank => {
            debug!("Cancelling debounce timer");
            timer.cancel();
        }
    }
}
