use kdam::tqdm;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::{normalize_ops, table_ops, FeedError};
use crate::config::AppConfiguration;

/// extracts every configured feed archive and rebuilds the two accumulated
/// tables from scratch (full rebuild, not incremental upsert). feeds are
/// processed strictly sequentially because they append to shared tables. a
/// mid-loop failure leaves partially rebuilt tables; the next run re-purges
/// them, which is the recovery mechanism.
pub fn merge_feeds(config: &AppConfiguration) -> Result<(), FeedError> {
    std::fs::create_dir_all(&config.data_dir)
        .map_err(|e| FeedError::DataDirError(config.data_dir.display().to_string(), e))?;
    let extract_dir = config.extract_dir();
    extract_all_feeds(&config.feeds, &extract_dir)?;

    // purge prior tables
    let stops_path = config.stops_table_path();
    let visits_path = config.visits_table_path();
    let mut stops_writer = table_ops::create_table_writer(&stops_path)?;
    let mut visits_writer = table_ops::create_table_writer(&visits_path)?;

    let iter = tqdm!(
        config.feeds.keys(),
        total = config.feeds.len(),
        desc = "merge feeds"
    );
    for feed_name in iter {
        let (stops, visits) = normalize_ops::parse_feed(&extract_dir.join(feed_name), feed_name)?;
        log::info!(
            "feed '{}': {} stops, {} stop visits",
            feed_name,
            stops.len(),
            visits.len()
        );
        for stop in stops {
            stops_writer
                .serialize(stop)
                .map_err(|e| FeedError::TableWriteError(stops_path.display().to_string(), e))?;
        }
        for visit in visits {
            visits_writer
                .serialize(visit)
                .map_err(|e| FeedError::TableWriteError(visits_path.display().to_string(), e))?;
        }
    }
    eprintln!();

    stops_writer
        .flush()
        .map_err(|e| FeedError::TableFlushError(stops_path.display().to_string(), e))?;
    visits_writer
        .flush()
        .map_err(|e| FeedError::TableFlushError(visits_path.display().to_string(), e))?;
    drop(stops_writer);
    drop(visits_writer);

    std::fs::remove_dir_all(&extract_dir)
        .map_err(|e| FeedError::DataDirError(extract_dir.display().to_string(), e))?;
    log::info!(
        "merged {} feeds into {}",
        config.feeds.len(),
        config.data_dir.display()
    );
    Ok(())
}

fn extract_all_feeds(
    feeds: &BTreeMap<String, PathBuf>,
    extract_dir: &Path,
) -> Result<(), FeedError> {
    for (feed_name, archive_path) in feeds {
        let filename = archive_path.display().to_string();
        let file = File::open(archive_path)
            .map_err(|e| FeedError::ArchiveOpenError(filename.clone(), e.to_string()))?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| FeedError::ArchiveOpenError(filename.clone(), e.to_string()))?;
        archive
            .extract(extract_dir.join(feed_name))
            .map_err(|e| FeedError::ArchiveExtractError(filename.clone(), e.to_string()))?;
    }
    Ok(())
}
