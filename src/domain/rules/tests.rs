// Unit tests for domain rules

use std::path::{Path, PathBuf};

use crate::domain::model::*;
use crate::domain::rules::*;

#[test]
fn test_clip_file_name_format() {
    let interval = Interval::new(11.0, 17.0).unwrap();
    assert_eq!(
        ClipNaming::file_name(1, &interval, "mp4"),
        "clip_002_11.0s-17.0s.mp4"
    );
}

#[test]
fn test_clip_file_name_rounds_to_one_decimal() {
    let interval = Interval::new(3.14159, 9.96).unwrap();
    assert_eq!(
        ClipNaming::file_name(41, &interval, "mkv"),
        "clip_042_3.1s-10.0s.mkv"
    );
}

#[test]
fn test_clip_file_name_wide_index() {
    let interval = Interval::new(0.0, 1.0).unwrap();
    assert_eq!(
        ClipNaming::file_name(1234, &interval, "mp4"),
        "clip_1235_0.0s-1.0s.mp4"
    );
}

#[test]
fn test_clip_path_joins_output_dir() {
    let interval = Interval::new(0.0, 4.0).unwrap();
    let path = ClipNaming::clip_path(Path::new("out"), 0, &interval, "mp4");
    assert_eq!(path, PathBuf::from("out").join("clip_001_0.0s-4.0s.mp4"));
}

#[test]
fn test_extension_for_input() {
    assert_eq!(ClipNaming::extension_for(Path::new("a/b/Movie.MOV")), "mov");
    assert_eq!(ClipNaming::extension_for(Path::new("a/b/movie")), "mp4");
}

#[test]
fn test_output_dir_for_input() {
    let root = Path::new("output_clips");
    let input = Path::new("input/holiday.mp4");
    assert_eq!(
        ClipNaming::output_dir_for(root, input, true),
        PathBuf::from("output_clips").join("holiday")
    );
    assert_eq!(ClipNaming::output_dir_for(root, input, false), root);
}

#[test]
fn test_input_selector_matches_case_insensitively() {
    let extensions = vec!["mp4".to_string(), ".MKV".to_string()];
    assert!(InputSelector::is_supported(Path::new("x/clip.MP4"), &extensions));
    assert!(InputSelector::is_supported(Path::new("x/clip.mkv"), &extensions));
    assert!(!InputSelector::is_supported(Path::new("x/clip.txt"), &extensions));
    assert!(!InputSelector::is_supported(Path::new("x/README"), &extensions));
}

#[test]
fn test_planning_rules() {
    let clip = DurationRange { min: 3.0, max: 7.0 };
    let gap = DurationRange { min: 5.0, max: 10.0 };
    assert!(PlanningRules::validate_ranges(&clip, &gap).is_ok());

    let bad_gap = DurationRange { min: 0.0, max: 10.0 };
    assert!(PlanningRules::validate_ranges(&clip, &bad_gap).is_err());

    assert!(PlanningRules::validate_total_duration(20.0).is_ok());
    assert!(PlanningRules::validate_total_duration(0.0).is_err());
    assert!(PlanningRules::validate_total_duration(f64::NAN).is_err());
}
