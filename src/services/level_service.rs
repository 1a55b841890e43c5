use crate::models::domain::level::{Level, LEVELS};
use crate::models::domain::QuizResultRecord;

/// Where a point total sits in the tier ladder and how far it is from the
/// next tier. `next_level` is `None` at the top of the ladder.
#[derive(Clone, Debug)]
pub struct LevelProgress {
    pub level: &'static Level,
    pub progress_percent: f64,
    pub points_to_next: i64,
    pub next_level: Option<&'static Level>,
}

/// Pure classification of accumulated quiz points into tiers. Holds no state
/// and touches no storage; callers feed it whatever total they have.
pub struct LevelService;

impl LevelService {
    /// Returns the tier whose inclusive range contains `total_points`.
    /// Negative totals cannot arise from recorded scores, but a caller
    /// passing one gets the lowest tier rather than an error.
    pub fn get_level(total_points: i64) -> &'static Level {
        let points = total_points.max(0);

        LEVELS
            .iter()
            .find(|level| level.contains(points))
            .unwrap_or(&LEVELS[0])
    }

    /// Progress within the current tier, as a percentage of the distance to
    /// the next tier's threshold. The final tier reports 100 percent with
    /// nothing left to reach.
    pub fn get_progress(total_points: i64) -> LevelProgress {
        let points = total_points.max(0);
        let index = LEVELS
            .iter()
            .position(|level| level.contains(points))
            .unwrap_or(0);
        let level = &LEVELS[index];

        match LEVELS.get(index + 1) {
            None => LevelProgress {
                level,
                progress_percent: 100.0,
                points_to_next: 0,
                next_level: None,
            },
            Some(next_level) => {
                let span = (next_level.min_points - level.min_points) as f64;
                let into_tier = (points - level.min_points) as f64;
                let progress_percent = (100.0 * into_tier / span).clamp(0.0, 100.0);

                LevelProgress {
                    level,
                    progress_percent,
                    points_to_next: next_level.min_points - points,
                    next_level: Some(next_level),
                }
            }
        }
    }

    /// Total points across a player's recorded attempts. Every attempt
    /// counts, indefinitely; an empty history is zero.
    pub fn sum_scores(results: &[QuizResultRecord]) -> i64 {
        results.iter().map(|record| record.score as i64).sum()
    }
}
