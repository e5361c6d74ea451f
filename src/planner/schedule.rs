//! Clip schedule implementation

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipPlan, DurationRange, Interval};
use crate::domain::rules::PlanningRules;
use crate::planner::RandomSource;

/// Planner producing clip/gap schedules from two length ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanner {
    clip_range: DurationRange,
    gap_range: DurationRange,
}

impl ClipPlanner {
    /// Create a planner, rejecting ranges with a non-positive minimum
    pub fn new(clip_range: DurationRange, gap_range: DurationRange) -> Result<Self, DomainError> {
        PlanningRules::validate_ranges(&clip_range, &gap_range)?;
        Ok(Self {
            clip_range,
            gap_range,
        })
    }

    pub fn clip_range(&self) -> DurationRange {
        self.clip_range
    }

    pub fn gap_range(&self) -> DurationRange {
        self.gap_range
    }

    /// Plan clips over `[0, total_duration]`.
    ///
    /// Each step draws a clip length and a gap length. The last clip is clamped
    /// to the media end and may be shorter than the clip minimum; a media
    /// shorter than the clip minimum still yields one clip covering all of it.
    pub fn plan<R>(&self, total_duration: f64, rng: &mut R) -> Result<ClipPlan, DomainError>
    where
        R: RandomSource + ?Sized,
    {
        PlanningRules::validate_total_duration(total_duration)?;

        let mut intervals = Vec::new();
        let mut cursor = 0.0_f64;

        while cursor < total_duration {
            let clip_len = self.draw(&self.clip_range, rng);
            let clip_end = (cursor + clip_len).min(total_duration);
            intervals.push(Interval {
                start: cursor,
                end: clip_end,
            });

            let gap_len = self.draw(&self.gap_range, rng);
            cursor = clip_end + gap_len;
        }

        debug!(
            clips = intervals.len(),
            total_duration, "Planned clip schedule"
        );

        Ok(ClipPlan::from_parts(total_duration, intervals))
    }

    // Out-of-range draws are pulled back in so the cursor always advances.
    fn draw<R>(&self, range: &DurationRange, rng: &mut R) -> f64
    where
        R: RandomSource + ?Sized,
    {
        rng.next_in(range).clamp(range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{ScriptedRandom, SeededRandom};

    fn planner(clip: (f64, f64), gap: (f64, f64)) -> ClipPlanner {
        ClipPlanner::new(
            DurationRange { min: clip.0, max: clip.1 },
            DurationRange { min: gap.0, max: gap.1 },
        )
        .unwrap()
    }

    #[test]
    fn test_scripted_two_clip_plan() {
        let planner = planner((3.0, 7.0), (5.0, 10.0));
        let mut rng = ScriptedRandom::from_clips_and_gaps(&[4.0, 6.0], &[7.0]);

        let plan = planner.plan(20.0, &mut rng).unwrap();

        assert_eq!(
            plan.intervals(),
            &[
                Interval { start: 0.0, end: 4.0 },
                Interval { start: 11.0, end: 17.0 },
            ]
        );
    }

    #[test]
    fn test_short_media_yields_single_clamped_clip() {
        let planner = planner((3.0, 7.0), (5.0, 10.0));
        let mut rng = SeededRandom::from_seed(1);

        let plan = planner.plan(2.0, &mut rng).unwrap();

        assert_eq!(plan.intervals(), &[Interval { start: 0.0, end: 2.0 }]);
    }

    #[test]
    fn test_last_clip_clamped_to_duration() {
        let planner = planner((3.0, 7.0), (5.0, 10.0));
        let mut rng = ScriptedRandom::from_clips_and_gaps(&[5.0, 7.0], &[5.0]);

        let plan = planner.plan(13.0, &mut rng).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.intervals()[1], Interval { start: 10.0, end: 13.0 });
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        let planner = planner((3.0, 7.0), (5.0, 10.0));
        let mut rng = ScriptedRandom::new([0.0, 100.0]);

        let plan = planner.plan(30.0, &mut rng).unwrap();

        assert_eq!(plan.intervals()[0], Interval { start: 0.0, end: 3.0 });
        assert_eq!(plan.intervals()[1].start, 13.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bad = ClipPlanner::new(
            DurationRange { min: 0.0, max: 7.0 },
            DurationRange { min: 5.0, max: 10.0 },
        );
        assert!(matches!(bad, Err(DomainError::InvalidConfig(_))));

        let planner = planner((3.0, 7.0), (5.0, 10.0));
        let mut rng = SeededRandom::from_seed(3);
        assert!(planner.plan(0.0, &mut rng).is_err());
        assert!(planner.plan(-4.0, &mut rng).is_err());
    }
}
