use chrono::NaiveDate;

use crate::models::{PointEvent, PointKind, SavingsRecord};

fn on(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Benchmark points recorded across the group's plants for the current year.
pub fn point_events() -> Vec<PointEvent> {
    let rows = [
        ("Chakan", PointKind::Origin, 10, on(2025, 1, 14), "Robotic weld seam inspection"),
        ("Pune", PointKind::Copier, 5, on(2025, 1, 21), "Robotic weld seam inspection"),
        ("Chakan", PointKind::Origin, 10, on(2025, 2, 3), "Robotic weld seam inspection"),
        ("Nashik", PointKind::Copier, 5, on(2025, 2, 5), "Robotic weld seam inspection"),
        ("Pune", PointKind::Origin, 10, on(2025, 2, 18), "Compressed air leak audit"),
        ("Hosur", PointKind::Copier, 5, on(2025, 3, 2), "Compressed air leak audit"),
        ("Nashik", PointKind::Origin, 10, on(2025, 3, 11), "Paint shop sludge recovery"),
        ("Pantnagar", PointKind::Copier, 5, on(2025, 3, 19), "Paint shop sludge recovery"),
        ("Hosur", PointKind::Origin, 10, on(2025, 4, 7), "Quick die change trolley"),
        ("Chakan", PointKind::Copier, 5, on(2025, 4, 15), "Quick die change trolley"),
        ("Pune", PointKind::Origin, 10, on(2025, 4, 22), "Compressed air leak audit"),
        ("Pantnagar", PointKind::Copier, 5, on(2025, 5, 6), "Compressed air leak audit"),
        ("Nashik", PointKind::Copier, 5, on(2025, 5, 13), "Quick die change trolley"),
        ("Pantnagar", PointKind::Origin, 10, on(2025, 5, 28), "Solar canopy over scrap yard"),
        ("Hosur", PointKind::Copier, 5, on(2025, 6, 9), "Solar canopy over scrap yard"),
    ];

    rows.into_iter()
        .map(|(plant, kind, points, occurred_on, title)| PointEvent {
            plant_name: plant.to_string(),
            kind,
            points,
            occurred_on,
            source_title: title.to_string(),
        })
        .collect()
}

/// Monthly and year-to-date savings per plant, in lakh.
pub fn savings_records() -> Vec<SavingsRecord> {
    let rows = [
        ("Chakan", [(18.2, 204.0), (17.5, 212.4), (16.9, 218.1), (15.8, 221.6), (18.1, 226.3), (17.0, 231.0)]),
        ("Pune", [(13.4, 151.2), (12.8, 158.9), (14.1, 166.0), (13.2, 173.5), (16.4, 184.2), (13.7, 190.8)]),
        ("Nashik", [(9.6, 102.5), (10.4, 110.0), (8.8, 118.3), (9.9, 126.7), (10.2, 134.9), (11.1, 141.0)]),
        ("Hosur", [(5.5, 55.5), (6.2, 61.7), (4.9, 66.6), (7.1, 73.7), (6.6, 80.3), (5.8, 86.1)]),
        ("Pantnagar", [(2.1, 22.1), (3.4, 25.5), (1.8, 27.3), (4.9, 52.2), (3.3, 55.5), (2.6, 58.1)]),
    ];

    let mut records = Vec::new();
    for (plant, months) in rows {
        for (offset, (monthly, ytd)) in months.into_iter().enumerate() {
            records.push(SavingsRecord {
                plant_name: plant.to_string(),
                month: offset as u32 + 1,
                monthly,
                ytd,
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::aggregate;

    #[test]
    fn sample_board_has_every_plant() {
        let rows = aggregate(&point_events());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].plant_name, "Chakan");
        assert_eq!(rows[0].total_points, 25);
    }

    #[test]
    fn sample_savings_cover_first_half_year() {
        let records = savings_records();
        assert_eq!(records.len(), 30);
        assert!(records.iter().all(|record| (1..=6).contains(&record.month)));
    }

    #[test]
    fn sample_savings_span_the_star_bands() {
        let plants = crate::stars::plant_stars(&savings_records(), 3).unwrap();
        let averages: Vec<f64> = plants.iter().map(|plant| plant.ytd_average).collect();
        assert_eq!(averages, vec![5.0, 4.0, 3.0, 2.0, 0.0]);
    }
}
