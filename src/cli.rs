use chrono::FixedOffset;
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "terminal-streak",
    version,
    about = "Terminal companion dashboard for a habit-streak tracker"
)]
pub struct Cli {
    /// Backend base URL (the bot API or its proxy)
    #[arg(
        long,
        env = "STREAK_API_URL",
        default_value = "https://nogtegrizzly-production.up.railway.app"
    )]
    pub api_url: String,

    /// Opaque auth blob forwarded to the backend as `initData`
    #[arg(long, env = "STREAK_INIT_DATA")]
    pub init_data: Option<String>,

    /// Override the local UTC offset in minutes (default: system zone)
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 300)]
    pub refresh_interval: u64,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(minutes) = self.utc_offset
            && !(-720..=840).contains(&minutes)
        {
            anyhow::bail!("--utc-offset must be within -720..=840 minutes");
        }
        Ok(())
    }

    /// Resolved fixed offset, `None` meaning "use the system zone".
    #[must_use]
    pub fn effective_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_with_defaults() {
        let cli = Cli::parse_from(["terminal-streak"]);
        assert!(cli.init_data.is_none());
        assert_eq!(cli.refresh_interval, 300);
        assert!(cli.effective_offset().is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn parses_negative_utc_offset() {
        let cli = Cli::parse_from(["terminal-streak", "--utc-offset", "-300"]);
        let offset = cli.effective_offset().expect("offset resolves");
        assert_eq!(offset.local_minus_utc(), -300 * 60);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn rejects_offsets_outside_real_zones() {
        let cli = Cli::parse_from(["terminal-streak", "--utc-offset", "900"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn init_data_comes_from_flag() {
        let cli = Cli::parse_from(["terminal-streak", "--init-data", "blob"]);
        assert_eq!(cli.init_data.as_deref(), Some("blob"));
    }
}
