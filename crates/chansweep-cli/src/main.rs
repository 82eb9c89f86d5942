/// chansweep: delete every message a channel received on one UTC day.
///
/// Usage: chansweep <channel> <YYYY-MM-DD>
///
/// The platform endpoint and the session credential come from the
/// environment (`CHANSWEEP_BASE_URL`, `CHANSWEEP_TOKEN`); establishing the
/// session (login, verification codes, 2FA) happens elsewhere.

use chansweep_client::HttpGateway;
use chansweep_core::{TracingReporter, sweep_day};
use chrono::NaiveDate;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "chansweep_cli=info,chansweep_core=info,chansweep_client=info".into()
            }),
        )
        .init();

    // Args
    let mut args = std::env::args().skip(1);
    let (Some(channel_input), Some(date_input)) = (args.next(), args.next()) else {
        eprintln!("usage: chansweep <channel> <YYYY-MM-DD>");
        eprintln!("  channel: name (#announcements) or numeric id");
        eprintln!("  deletes every message sent that UTC day; irreversible");
        std::process::exit(2);
    };
    let day: NaiveDate = date_input
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid date {date_input:?}, expected YYYY-MM-DD"))?;

    // Config
    let base_url = std::env::var("CHANSWEEP_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".into());
    let token = std::env::var("CHANSWEEP_TOKEN").map_err(|_| {
        anyhow::anyhow!("CHANSWEEP_TOKEN is not set (bearer token of an established session)")
    })?;

    let gateway = HttpGateway::new(base_url, token);
    let channel = gateway.resolve_channel(&channel_input).await?;
    info!(channel = %channel, %day, "sweeping one day of messages");

    let summary = sweep_day(&gateway, channel, day, &TracingReporter).await?;

    if summary.found == 0 {
        info!(%day, "no messages found that day");
    } else if summary.deleted < summary.found {
        warn!(
            deleted = summary.deleted,
            found = summary.found,
            "sweep finished with skipped batches"
        );
    } else {
        info!(deleted = summary.deleted, "sweep finished");
    }
    Ok(())
}
