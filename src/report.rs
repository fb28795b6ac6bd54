use std::fmt::Write;

use crate::errors::PortalError;
use crate::leaderboard::{self, is_podium};
use crate::models::{
    PlantLeaderboardRow, PlantStars, PlantSummary, PointEvent, PointKind, SavingsRecord,
};
use crate::stars::{self, star_glyphs};

fn podium_marker(rank: usize) -> &'static str {
    match rank {
        1 => " 🥇",
        2 => " 🥈",
        3 => " 🥉",
        _ => "",
    }
}

fn kind_label(kind: PointKind) -> &'static str {
    match kind {
        PointKind::Origin => "origin",
        PointKind::Copier => "copier",
    }
}

pub fn render_leaderboard(rows: &[PlantLeaderboardRow], limit: usize) -> String {
    let mut output = String::new();

    if rows.is_empty() {
        let _ = writeln!(output, "No benchmark points recorded for this window.");
        return output;
    }

    let _ = writeln!(output, "Benchmark BP leaderboard:");
    for row in rows.iter().take(limit) {
        let _ = writeln!(
            output,
            "{} #{} {} with {} points across {} events",
            if is_podium(row.rank) { "*" } else { "-" },
            row.rank,
            row.plant_name,
            row.total_points,
            row.events.len()
        );
    }
    output
}

pub fn render_plant(row: &PlantLeaderboardRow, summary: &PlantSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{} (rank #{}, {} points)",
        row.plant_name, row.rank, row.total_points
    );
    let _ = writeln!(
        output,
        "Originated: {} practices, {} points",
        summary.originated_count, summary.originated_points
    );
    for originated in &summary.originated {
        let _ = writeln!(
            output,
            "  - {}: copied {} times, {} points",
            originated.title, originated.copy_count, originated.total_points
        );
    }
    let _ = writeln!(
        output,
        "Copied: {} practices, {} points",
        summary.copied_count, summary.copied_points
    );
    for copied in &summary.copied {
        let _ = writeln!(
            output,
            "  - {} on {}: {} points",
            copied.title, copied.occurred_on, copied.points
        );
    }
    output
}

pub fn render_stars(plants: &[PlantStars]) -> String {
    let mut output = String::new();

    if plants.is_empty() {
        let _ = writeln!(output, "No savings recorded for this period.");
        return output;
    }

    for plant in plants {
        let months: Vec<String> = plant
            .monthly
            .iter()
            .map(|month| format!("M{}={}", month.month, month.stars))
            .collect();
        let _ = writeln!(
            output,
            "- {}: YTD {:.1} stars ({})",
            plant.plant_name,
            plant.ytd_average,
            months.join(", ")
        );
    }
    output
}

pub fn build_report(
    window_label: &str,
    events: &[PointEvent],
    savings: &[SavingsRecord],
    through_month: u32,
) -> Result<String, PortalError> {
    let rows = leaderboard::aggregate(events);
    let plants = stars::plant_stars(savings, through_month)?;

    let mut output = String::new();

    let _ = writeln!(output, "# Best Practices Benchmark Report");
    let _ = writeln!(
        output,
        "Generated for {} (savings through month {})",
        window_label, through_month
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Leaderboard");

    if rows.is_empty() {
        let _ = writeln!(output, "No benchmark points recorded for this window.");
    } else {
        let _ = writeln!(output, "| Rank | Plant | Points | Origin | Copier |");
        let _ = writeln!(output, "|---|---|---|---|---|");
        for row in &rows {
            let summary = leaderboard::summarize_plant(row);
            let _ = writeln!(
                output,
                "| {}{} | {} | {} | {} | {} |",
                row.rank,
                podium_marker(row.rank),
                row.plant_name,
                row.total_points,
                summary.originated_points,
                summary.copied_points
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Copied Practices");

    let mut originated: Vec<(String, String, usize)> = rows
        .iter()
        .flat_map(|row| {
            leaderboard::summarize_plant(row)
                .originated
                .into_iter()
                .map(move |summary| (summary.title, row.plant_name.clone(), summary.copy_count))
        })
        .collect();
    originated.sort_by(|a, b| b.2.cmp(&a.2));

    if originated.is_empty() {
        let _ = writeln!(output, "No originated practices in this window.");
    } else {
        for (title, plant, copy_count) in originated.iter().take(5) {
            let _ = writeln!(output, "- {} ({}): {} times", title, plant, copy_count);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Savings Stars");

    if plants.is_empty() {
        let _ = writeln!(output, "No savings recorded for this period.");
    } else {
        for plant in &plants {
            let latest = plant.monthly.last().map(|month| month.stars).unwrap_or(0);
            let _ = writeln!(
                output,
                "- {}: {} this month, YTD average {:.1}",
                plant.plant_name,
                star_glyphs(latest),
                plant.ytd_average
            );
        }
    }

    let mut recent_events = events.to_vec();
    recent_events.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Benchmark Activity");

    if recent_events.is_empty() {
        let _ = writeln!(output, "No benchmark points recorded for this window.");
    } else {
        for event in recent_events.iter().take(5) {
            let _ = writeln!(
                output,
                "- {} ({}, +{}) on {}: {}",
                event.plant_name,
                kind_label(event.kind),
                event.points,
                event.occurred_on,
                event.source_title
            );
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn report_lists_every_plant() {
        let events = sample::point_events();
        let report = build_report("all plants", &events, &sample::savings_records(), 6).unwrap();

        for plant in ["Chakan", "Pune", "Nashik", "Hosur", "Pantnagar"] {
            assert!(report.contains(plant), "missing {plant}");
        }
        assert!(report.contains("| 1 🥇 | Chakan | 25 | 20 | 5 |"));
        assert!(report.contains("| 1 🥇 | Pune | 25 | 20 | 5 |"));
        assert!(report.contains("| 3 🥉 | Nashik | 20 |"));
    }

    #[test]
    fn report_handles_empty_inputs() {
        let report = build_report("last 30 days", &[], &[], 3).unwrap();
        assert!(report.contains("No benchmark points recorded for this window."));
        assert!(report.contains("No savings recorded for this period."));
    }

    #[test]
    fn leaderboard_text_marks_podium_and_respects_limit() {
        let rows = leaderboard::aggregate(&sample::point_events());
        let text = render_leaderboard(&rows, 4);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("* #1 Chakan"));
        assert!(lines[3].starts_with("* #3 Nashik"));
        assert!(lines[4].starts_with("* #3 Hosur"));
    }

    #[test]
    fn plant_text_lists_both_sides() {
        let rows = leaderboard::aggregate(&sample::point_events());
        let chakan = leaderboard::find_plant(&rows, "Chakan").unwrap();
        let text = render_plant(chakan, &leaderboard::summarize_plant(chakan));

        assert!(text.contains("Robotic weld seam inspection: copied 2 times, 20 points"));
        assert!(text.contains("Copied: 1 practices, 5 points"));
    }
}
