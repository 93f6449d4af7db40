pub mod args;

pub use args::Args;

use chrono::Utc;
use git_insights::{Error, ProfileReport, ProfileStatsCalculator, Result, StatsOptions};
use log::info;
use snapshot_client::SnapshotClientBuilder;

pub async fn calculate_profile_stats(args: Args) -> Result<ProfileReport> {
    let client = SnapshotClientBuilder::default()
        .with_path(&args.snapshot)
        .with_forks(args.include_forks)
        .build()
        .await?;

    let options = StatsOptions::default()
        .with_max_visible_languages(args.max_visible_languages)
        .with_excluded_languages(args.exclude_languages.unwrap_or_default())
        .with_time_zone(args.time_zone);
    info!(
        "Showing {} languages, excluding {}, bucketing at offset {}",
        options.max_visible_languages,
        options.excluded_languages.len(),
        options.time_zone
    );

    let now = args.now.map_or_else(Utc::now, |now| now.with_timezone(&Utc));
    let calculator = ProfileStatsCalculator::new(client, options);
    calculator.calculate(now).await
}

pub fn render(report: &ProfileReport, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(report).map_err(|err| Error::Other(err.into()))
    } else {
        Ok(report.to_string())
    }
}
