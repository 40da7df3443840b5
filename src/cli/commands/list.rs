//! List series command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_series(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let series_list = store.list_series().await?;

    if series_list.is_empty() {
        println!("No series tracked yet.");
        println!();
        println!("Add one with: POST /api/series");
        return Ok(());
    }

    println!("Tracked Series ({} total)", series_list.len());
    println!("{:-<70}", "");

    for series in series_list {
        let status_indicator = match series.status.as_str() {
            "Watching" => "▶",
            "Completed" => "✓",
            "Dropped" => "✗",
            _ => "•",
        };

        println!(
            "{} {} [{}/{}]",
            status_indicator, series.title, series.current_episode, series.episodes
        );
        println!(
            "  ID: {} | Status: {} | Score: {} | Genre: {}",
            series.id, series.status, series.score, series.genre
        );
    }

    Ok(())
}
