use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};

use crate::errors::PortalError;
use crate::models::{
    CopiedSummary, OriginatedSummary, PlantLeaderboardRow, PlantSummary, PointEvent, PointKind,
};

/// Groups events per plant, orders plants by total points and assigns
/// competition ranks (equal totals share a rank, the next total resumes at
/// its position). Plants with equal totals keep the order in which they first
/// appear in `events`.
pub fn aggregate(events: &[PointEvent]) -> Vec<PlantLeaderboardRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<PlantLeaderboardRow> = Vec::new();

    for event in events {
        let slot = *index.entry(event.plant_name.as_str()).or_insert_with(|| {
            rows.push(PlantLeaderboardRow {
                plant_name: event.plant_name.clone(),
                total_points: 0,
                rank: 0,
                events: Vec::new(),
            });
            rows.len() - 1
        });

        let row = &mut rows[slot];
        row.total_points += u64::from(event.points);
        row.events.push(event.clone());
    }

    // sort_by is stable, ties stay in first-seen order
    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let mut previous: Option<(u64, usize)> = None;
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = match previous {
            Some((total, rank)) if total == row.total_points => rank,
            _ => position + 1,
        };
        previous = Some((row.total_points, row.rank));
    }

    tracing::debug!(
        events = events.len(),
        plants = rows.len(),
        "aggregated benchmark points"
    );
    rows
}

pub fn summarize_plant(row: &PlantLeaderboardRow) -> PlantSummary {
    let mut originated: Vec<OriginatedSummary> = Vec::new();
    let mut copied: Vec<CopiedSummary> = Vec::new();
    let mut originated_points = 0u64;
    let mut copied_points = 0u64;

    for event in &row.events {
        match event.kind {
            PointKind::Origin => {
                originated_points += u64::from(event.points);
                match originated
                    .iter_mut()
                    .find(|summary| summary.title == event.source_title)
                {
                    Some(summary) => {
                        summary.copy_count += 1;
                        summary.total_points += u64::from(event.points);
                    }
                    None => originated.push(OriginatedSummary {
                        title: event.source_title.clone(),
                        copy_count: 1,
                        total_points: u64::from(event.points),
                    }),
                }
            }
            PointKind::Copier => {
                copied_points += u64::from(event.points);
                copied.push(CopiedSummary {
                    title: event.source_title.clone(),
                    points: event.points,
                    occurred_on: event.occurred_on,
                });
            }
        }
    }

    PlantSummary {
        originated_count: originated.len(),
        originated,
        originated_points,
        copied_count: copied.len(),
        copied,
        copied_points,
    }
}

pub fn events_since(events: &[PointEvent], cutoff: NaiveDate) -> Vec<PointEvent> {
    events
        .iter()
        .filter(|event| event.occurred_on >= cutoff)
        .cloned()
        .collect()
}

pub fn cutoff_date(since_days: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(since_days.max(1))
}

pub fn find_plant<'a>(
    rows: &'a [PlantLeaderboardRow],
    name: &str,
) -> Result<&'a PlantLeaderboardRow, PortalError> {
    rows.iter()
        .find(|row| row.plant_name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PortalError::UnknownPlant(name.to_string()))
}

/// Ranks 1 to 3 get highlighted on the board.
pub fn is_podium(rank: usize) -> bool {
    (1..=3).contains(&rank)
}
