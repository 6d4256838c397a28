use crate::modules::series::domain::Series;

/// Query for every series in the current snapshot
#[derive(Debug, Clone, Default)]
pub struct ListSeriesQuery {
    /// Drop series that only have a single season
    pub multi_season_only: bool,
}

impl ListSeriesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multi_season_only() -> Self {
        Self {
            multi_season_only: true,
        }
    }
}

/// Result of listing series
pub type ListSeriesResult = Vec<Series>;
