use splitx_cli::domain::model::{DurationRange, Interval};
use splitx_cli::planner::{ClipPlanner, ScriptedRandom, SeededRandom};
use splitx_cli::DomainError;

const EPSILON: f64 = 1e-9;

fn range(min: f64, max: f64) -> DurationRange {
    DurationRange { min, max }
}

fn default_planner() -> ClipPlanner {
    ClipPlanner::new(range(3.0, 7.0), range(5.0, 10.0)).unwrap()
}

#[test]
fn test_plan_properties_hold_across_seeds() {
    let planner = default_planner();

    for seed in 0..200u64 {
        for &total in &[1.0, 3.0, 9.5, 20.0, 63.7, 600.0] {
            let mut rng = SeededRandom::from_seed(seed);
            let plan = planner.plan(total, &mut rng).unwrap();
            let intervals = plan.intervals();

            assert!(!intervals.is_empty(), "seed {} total {}", seed, total);
            assert_eq!(intervals[0].start, 0.0);

            for (i, clip) in intervals.iter().enumerate() {
                assert!(clip.start < clip.end, "empty clip {:?}", clip);
                assert!(clip.end <= total + EPSILON);
                assert!(clip.duration() <= 7.0 + EPSILON);

                let is_last = i + 1 == intervals.len();
                if !is_last {
                    assert!(
                        clip.duration() >= 3.0 - EPSILON,
                        "only the final clip may be short: {:?}",
                        clip
                    );
                } else if clip.duration() < 3.0 - EPSILON {
                    assert!((clip.end - total).abs() < EPSILON);
                }
            }

            for gap in plan.gaps() {
                assert!(gap >= 5.0 - EPSILON && gap <= 10.0 + EPSILON, "gap {}", gap);
            }

            let last = intervals[intervals.len() - 1];
            assert!(
                last.end + 10.0 >= total - EPSILON,
                "planning stopped early at {} of {}",
                last.end,
                total
            );
        }
    }
}

#[test]
fn test_same_seed_same_plan() {
    let planner = default_planner();

    let first = planner
        .plan(300.0, &mut SeededRandom::from_seed(42))
        .unwrap();
    let second = planner
        .plan(300.0, &mut SeededRandom::from_seed(42))
        .unwrap();
    let other = planner
        .plan(300.0, &mut SeededRandom::from_seed(43))
        .unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_twenty_second_scenario() {
    let planner = default_planner();
    let mut rng = ScriptedRandom::from_clips_and_gaps(&[4.0, 6.0], &[7.0, 8.0]);

    let plan = planner.plan(20.0, &mut rng).unwrap();

    assert_eq!(
        plan.intervals(),
        &[
            Interval { start: 0.0, end: 4.0 },
            Interval { start: 11.0, end: 17.0 },
        ]
    );
    assert_eq!(plan.gaps(), vec![7.0]);
    assert_eq!(plan.covered_duration(), 10.0);
}

#[test]
fn test_media_shorter_than_clip_minimum() {
    let planner = default_planner();
    let plan = planner.plan(2.0, &mut SeededRandom::from_seed(9)).unwrap();

    assert_eq!(plan.intervals(), &[Interval { start: 0.0, end: 2.0 }]);
}

#[test]
fn test_degenerate_ranges_give_regular_plan() {
    let planner = ClipPlanner::new(range(1.0, 1.0), range(1.0, 1.0)).unwrap();
    let plan = planner.plan(5.0, &mut SeededRandom::from_seed(0)).unwrap();

    assert_eq!(
        plan.intervals(),
        &[
            Interval { start: 0.0, end: 1.0 },
            Interval { start: 2.0, end: 3.0 },
            Interval { start: 4.0, end: 5.0 },
        ]
    );
}

#[test]
fn test_out_of_range_draws_are_clamped() {
    let planner = default_planner();
    let mut rng = ScriptedRandom::new([100.0, -4.0, 0.0, 50.0]);

    let plan = planner.plan(60.0, &mut rng).unwrap();

    assert_eq!(plan.intervals()[0], Interval { start: 0.0, end: 7.0 });
    assert_eq!(plan.intervals()[1], Interval { start: 12.0, end: 15.0 });
    assert_eq!(plan.gaps()[0], 5.0);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(
        ClipPlanner::new(range(0.0, 7.0), range(5.0, 10.0)),
        Err(DomainError::InvalidConfig(_))
    ));
    assert!(matches!(
        ClipPlanner::new(range(3.0, 7.0), range(10.0, 5.0)),
        Err(DomainError::InvalidConfig(_))
    ));

    let planner = default_planner();
    for total in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(planner.plan(total, &mut SeededRandom::from_seed(1)).is_err());
    }
}
