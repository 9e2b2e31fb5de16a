use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{interval, sleep};

use crate::{data::events::EventsPayload, domain::habit::ProfileSummary};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickRefresh,
    Input(Event),
    FetchStarted,
    ProfileFetched(ProfileSummary),
    EventsFetched(EventsPayload),
    FetchFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_refresh_task(tx: tokio::sync::mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(refresh_secs.max(30)));
        // Swallow the immediate first tick; bootstrap already fetched.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

pub fn schedule_retry(tx: tokio::sync::mpsc::Sender<AppEvent>, delay_secs: u64) {
    tokio::spawn(async move {
        sleep(Duration::from_secs(delay_secs.max(1))).await;
        let _ = tx.send(AppEvent::TickRefresh).await;
    });
}
