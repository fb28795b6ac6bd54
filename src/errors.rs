#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Cannot average star ratings over an empty series.")]
    EmptySeries,

    #[error("Invalid input: {}", .0)]
    InvalidInput(String),

    #[error("No plant named {:?} on the leaderboard.", .0)]
    UnknownPlant(String),
}
