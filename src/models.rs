use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Origin,
    Copier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEvent {
    pub plant_name: String,
    pub kind: PointKind,
    pub points: u32,
    pub occurred_on: NaiveDate,
    pub source_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantLeaderboardRow {
    pub plant_name: String,
    pub total_points: u64,
    pub rank: usize,
    pub events: Vec<PointEvent>,
}

/// One best practice this plant authored, with how often it earned Origin points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginatedSummary {
    pub title: String,
    pub copy_count: usize,
    pub total_points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedSummary {
    pub title: String,
    pub points: u32,
    pub occurred_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantSummary {
    pub originated: Vec<OriginatedSummary>,
    pub originated_count: usize,
    pub originated_points: u64,
    pub copied: Vec<CopiedSummary>,
    pub copied_count: usize,
    pub copied_points: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsInput {
    pub monthly: f64,
    pub ytd: f64,
}

/// Star count in `0..=5`.
pub type StarRating = u8;

/// A single month of savings for one plant, in lakh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRecord {
    pub plant_name: String,
    pub month: u32,
    pub monthly: f64,
    pub ytd: f64,
}

impl SavingsRecord {
    pub fn input(&self) -> SavingsInput {
        SavingsInput {
            monthly: self.monthly,
            ytd: self.ytd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthStars {
    pub month: u32,
    pub stars: StarRating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantStars {
    pub plant_name: String,
    pub monthly: Vec<MonthStars>,
    pub ytd_average: f64,
}
