use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, schedule_retry, start_refresh_task},
    cli::Cli,
    data::{events::EventsClient, profile::ProfileClient},
    domain::{
        calendar::MonthCursor,
        habit::{HabitBundle, ProfileSummary},
        time::Clock,
    },
    resilience::backoff::Backoff,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Stats,
    Calendar,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub screen: Screen,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub clock: Clock,
    pub bundle: Option<HabitBundle>,
    pub cursor: MonthCursor,
    pub backoff: Backoff,
    pub fetch_in_flight: bool,
    pending_profile: Option<ProfileSummary>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let clock = Clock::system(cli.effective_offset());
        Self {
            mode: AppMode::Loading,
            screen: Screen::Home,
            loading_message: "Загрузка...".to_string(),
            last_error: None,
            cursor: MonthCursor::at(clock.today()),
            clock,
            bundle: None,
            backoff: Backoff::new(5, 120),
            fetch_in_flight: false,
            pending_profile: None,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_refresh_task(tx.clone(), cli.refresh_interval);
                self.start_fetch(tx, cli).await?;
            }
            AppEvent::TickRefresh => {
                self.clock = self.clock.refreshed();
                if matches!(self.mode, AppMode::Loading | AppMode::Ready | AppMode::Error) {
                    self.start_fetch(tx, cli).await?;
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.loading_message = "Получаем данные...".to_string();
                if self.bundle.is_none() {
                    self.mode = AppMode::Loading;
                }
            }
            AppEvent::ProfileFetched(profile) => {
                self.pending_profile = Some(profile);
                self.fetch_events(tx, cli);
            }
            AppEvent::EventsFetched(payload) => {
                self.fetch_in_flight = false;
                if let Some(profile) = self.pending_profile.take() {
                    self.clock = self.clock.refreshed();
                    self.bundle = Some(HabitBundle {
                        profile,
                        events: payload.events,
                        chart: payload.chart,
                        fetched_at: Utc::now(),
                    });
                    self.mode = AppMode::Ready;
                    self.last_error = None;
                    self.backoff.reset();
                }
            }
            AppEvent::FetchFailed(err) => {
                self.fetch_in_flight = false;
                self.pending_profile = None;
                self.last_error = Some(err);
                if self.bundle.is_none() {
                    self.mode = AppMode::Error;
                }
                let delay = self.backoff.next_delay();
                schedule_retry(tx.clone(), delay);
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tx.send(AppEvent::Quit).await?;
                }
                KeyCode::Char('r') => {
                    self.start_fetch(tx, cli).await?;
                }
                KeyCode::Char('1') => {
                    self.screen = Screen::Home;
                }
                KeyCode::Char('2') => {
                    self.screen = Screen::Stats;
                }
                KeyCode::Char('3') => {
                    self.screen = Screen::Calendar;
                }
                KeyCode::Left if self.screen == Screen::Calendar => {
                    self.cursor.prev();
                }
                KeyCode::Right if self.screen == Screen::Calendar => {
                    self.cursor.next();
                }
                _ => {}
            },
            _ => {}
        }

        Ok(())
    }

    /// Kicks off the profile fetch; the events fetch chains off its success.
    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;

        let Some(init_data) = cli.init_data.clone() else {
            tx.send(AppEvent::FetchFailed(
                "initData недоступен — передайте --init-data или STREAK_INIT_DATA".to_string(),
            ))
            .await?;
            return Ok(());
        };

        let client = ProfileClient::with_base_url(&cli.api_url);
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.fetch(&init_data).await {
                Ok(profile) => {
                    let _ = tx2.send(AppEvent::ProfileFetched(profile)).await;
                }
                Err(err) => {
                    let _ = tx2.send(AppEvent::FetchFailed(err.to_string())).await;
                }
            }
        });

        Ok(())
    }

    fn fetch_events(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        let client = EventsClient::with_base_url(&cli.api_url);
        let init_data = cli.init_data.clone().unwrap_or_default();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let payload = client.fetch_or_empty(&init_data).await;
            let _ = tx2.send(AppEvent::EventsFetched(payload)).await;
        });
    }
}
