use std::collections::HashMap;

use crate::errors::PortalError;
use crate::models::{MonthStars, PlantStars, SavingsRecord, StarRating};

/// Star rating for one month of savings. Bands are checked top-down and the
/// first match wins, so the last band also catches any `ytd > 50, monthly > 4`
/// pair that falls between the tighter bands.
pub fn rate(monthly: f64, ytd: f64) -> StarRating {
    if ytd > 200.0 && monthly > 16.0 {
        5
    } else if ytd > 150.0 && ytd < 200.0 && monthly > 12.0 && monthly < 16.0 {
        4
    } else if ytd > 100.0 && ytd < 150.0 && monthly > 8.0 && monthly < 12.0 {
        3
    } else if ytd > 50.0 && ytd < 100.0 && monthly > 4.0 && monthly < 8.0 {
        2
    } else if ytd > 50.0 && monthly > 4.0 {
        1
    } else {
        0
    }
}

/// Mean of the monthly ratings, rounded half away from zero to one decimal.
pub fn rate_year_to_date(series: &[StarRating]) -> Result<f64, PortalError> {
    if series.is_empty() {
        return Err(PortalError::EmptySeries);
    }

    let total: u32 = series.iter().map(|stars| u32::from(*stars)).sum();
    let mean = f64::from(total) / series.len() as f64;
    Ok((mean * 10.0).round() / 10.0)
}

pub fn plant_stars(
    records: &[SavingsRecord],
    through_month: u32,
) -> Result<Vec<PlantStars>, PortalError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(&str, Vec<&SavingsRecord>)> = Vec::new();

    for record in records {
        if record.month == 0 || record.month > through_month {
            continue;
        }
        let slot = *index.entry(record.plant_name.as_str()).or_insert_with(|| {
            grouped.push((record.plant_name.as_str(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(record);
    }

    let mut plants = Vec::with_capacity(grouped.len());
    for (plant_name, mut months) in grouped {
        months.sort_by_key(|record| record.month);

        let monthly: Vec<MonthStars> = months
            .iter()
            .map(|record| {
                let savings = record.input();
                MonthStars {
                    month: record.month,
                    stars: rate(savings.monthly, savings.ytd),
                }
            })
            .collect();
        let series: Vec<StarRating> = monthly.iter().map(|month| month.stars).collect();

        plants.push(PlantStars {
            plant_name: plant_name.to_string(),
            ytd_average: rate_year_to_date(&series)?,
            monthly,
        });
    }

    tracing::debug!(
        records = records.len(),
        plants = plants.len(),
        through_month,
        "rated savings"
    );
    Ok(plants)
}

pub fn star_glyphs(stars: StarRating) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(plant: &str, month: u32, monthly: f64, ytd: f64) -> SavingsRecord {
        SavingsRecord {
            plant_name: plant.to_string(),
            month,
            monthly,
            ytd,
        }
    }

    #[test]
    fn bands_follow_expected_thresholds() {
        assert_eq!(rate(17.0, 210.0), 5);
        assert_eq!(rate(13.0, 180.0), 4);
        assert_eq!(rate(9.0, 120.0), 3);
        assert_eq!(rate(5.0, 60.0), 2);
        assert_eq!(rate(4.5, 120.0), 1);
        assert_eq!(rate(1.0, 10.0), 0);
    }

    #[test]
    fn boundaries_fall_through_to_looser_bands() {
        assert_eq!(rate(17.0, 200.0), 1);
        assert_eq!(rate(16.0, 210.0), 1);
        assert_eq!(rate(12.0, 180.0), 1);
        assert_eq!(rate(8.0, 100.0), 1);
        assert_eq!(rate(5.0, 50.0), 0);
        assert_eq!(rate(4.0, 60.0), 0);
    }

    #[test]
    fn just_above_the_floor_is_two_stars() {
        assert_eq!(rate(4.5, 55.0), 2);
    }

    #[test]
    fn mismatched_bands_still_earn_one_star() {
        assert_eq!(rate(5.0, 180.0), 1);
        assert_eq!(rate(20.0, 120.0), 1);
    }

    #[test]
    fn nan_earns_nothing() {
        assert_eq!(rate(f64::NAN, 300.0), 0);
        assert_eq!(rate(20.0, f64::NAN), 0);
    }

    #[test]
    fn year_to_date_average_rounds_to_one_decimal() {
        assert_eq!(rate_year_to_date(&[2, 3, 4]).unwrap(), 3.0);
        assert_eq!(rate_year_to_date(&[1, 2]).unwrap(), 1.5);
        assert_eq!(rate_year_to_date(&[1, 1, 2]).unwrap(), 1.3);
        assert_eq!(rate_year_to_date(&[2, 2, 3]).unwrap(), 2.3);
        assert_eq!(rate_year_to_date(&[5]).unwrap(), 5.0);
    }

    #[test]
    fn year_to_date_rejects_empty_series() {
        assert!(matches!(
            rate_year_to_date(&[]),
            Err(PortalError::EmptySeries)
        ));
    }

    #[test]
    fn plant_stars_only_counts_months_in_range() {
        let records = vec![
            record("Pune", 2, 13.0, 180.0),
            record("Chakan", 1, 1.0, 10.0),
            record("Pune", 1, 17.0, 210.0),
            record("Pune", 3, 9.0, 120.0),
        ];

        let plants = plant_stars(&records, 2).unwrap();
        assert_eq!(plants.len(), 2);

        let pune = &plants[0];
        assert_eq!(pune.plant_name, "Pune");
        let months: Vec<(u32, u8)> = pune.monthly.iter().map(|m| (m.month, m.stars)).collect();
        assert_eq!(months, vec![(1, 5), (2, 4)]);
        assert_eq!(pune.ytd_average, 4.5);

        assert_eq!(plants[1].plant_name, "Chakan");
        assert_eq!(plants[1].ytd_average, 0.0);
    }

    #[test]
    fn plant_with_only_future_months_is_skipped() {
        let records = vec![record("Hosur", 9, 17.0, 210.0)];
        assert!(plant_stars(&records, 3).unwrap().is_empty());
    }

    #[test]
    fn glyphs_fill_from_the_left() {
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(0), "☆☆☆☆☆");
    }
}
