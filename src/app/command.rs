use crate::app::action::FetchTicket;
use crate::domain::models::ExecuteRequest;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(FetchTicket),
    Execute(ExecuteRequest),
    ScheduleRerank { token: u64, delay: Duration },
    CancelRerank,
}
