mod common;
use common::{SAMPLE_JSON, ev};
use rdaylayout::AppError;
use rdaylayout::core::geometry::{GeometryOptions, blocks};
use rdaylayout::core::logic::{Core, PrepareOptions};
use rdaylayout::core::sweep::concurrency_profile;
use rdaylayout::import::{InputFormat, parse_records};
use rdaylayout::layout;
use rdaylayout::models::EventRecord;

#[test]
fn test_min_duration_stretches_short_events() {
    let records = vec![
        EventRecord::new("call", "10:00", "10:05"),
        EventRecord::new("next", "10:10", "10:40"),
    ];
    let opts = PrepareOptions {
        min_display_minutes: 15,
        skip_invalid: false,
    };

    let day = Core::layout_day(&records, &opts).unwrap();
    assert_eq!(day.events[0].end_minute, 615);
    // Stretched call now collides with the next event
    assert_eq!(day.results[0].column_count, 2);
    assert_eq!(day.results[1].column, 1);
}

#[test]
fn test_min_duration_is_capped_at_end_of_day() {
    let records = vec![EventRecord::new("late", "23:55", "23:58")];
    let opts = PrepareOptions {
        min_display_minutes: 30,
        skip_invalid: false,
    };
    let prepared = Core::prepare(&records, &opts).unwrap();
    assert_eq!(prepared.events[0].end_minute, 1440);
}

#[test]
fn test_huge_min_duration_fills_rest_of_day() {
    let records = vec![EventRecord::new("a", "08:00", "09:00")];
    for min in [i32::MAX as u32, u32::MAX] {
        let opts = PrepareOptions {
            min_display_minutes: min,
            skip_invalid: false,
        };
        let prepared = Core::prepare(&records, &opts).unwrap();
        assert_eq!(prepared.events[0].end_minute, 1440);
    }
}

#[test]
fn test_min_duration_does_not_repair_invalid_events() {
    let records = vec![EventRecord::new("zero", "09:00", "09:00")];
    let opts = PrepareOptions {
        min_display_minutes: 15,
        skip_invalid: false,
    };
    assert!(matches!(
        Core::prepare(&records, &opts),
        Err(AppError::InvalidInterval { index: 0, .. })
    ));
}

#[test]
fn test_skip_invalid_drops_and_reports() {
    let records = vec![
        EventRecord::new("ok", "08:00", "09:00"),
        EventRecord::new("bad_time", "8 am", "09:00"),
        EventRecord::new("reversed", "11:00", "10:00"),
        EventRecord::new("ok2", "08:30", "09:30"),
    ];
    let opts = PrepareOptions {
        min_display_minutes: 0,
        skip_invalid: true,
    };

    let day = Core::layout_day(&records, &opts).unwrap();
    let ids: Vec<&str> = day.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ok", "ok2"]);
    assert_eq!(day.skipped.len(), 2);
    assert!(matches!(
        &day.skipped[0],
        AppError::InvalidInterval { index: 1, id, .. } if id == "bad_time"
    ));
    assert_eq!(day.results[1].column, 1);
}

#[test]
fn test_without_skip_first_problem_aborts() {
    let records = vec![
        EventRecord::new("ok", "08:00", "09:00"),
        EventRecord::new("bad", "xx", "09:00"),
    ];
    let err = Core::layout_day(&records, &PrepareOptions::default()).unwrap_err();
    assert!(err.to_string().contains("bad"));
}

#[test]
fn test_validate_records_lists_every_problem() {
    let records = vec![
        EventRecord::new("a", "08:00", "08:00"),
        EventRecord::new("b", "08:00", "09:00"),
        EventRecord::new("c", "25:00", "26:00"),
    ];
    let problems = Core::validate_records(&records);
    assert_eq!(problems.len(), 2);
}

#[test]
fn test_block_geometry() {
    let events = vec![ev("a", "08:00", "10:00"), ev("b", "09:00", "09:30")];
    let results = layout(&events).unwrap();
    let out = blocks(&events, &results, &GeometryOptions { pixels_per_hour: 48.0 }).unwrap();

    assert_eq!(out[0].top, 384.0);
    assert_eq!(out[0].height, 96.0);
    assert_eq!(out[0].left_pct, 0.0);
    assert_eq!(out[0].width_pct, 50.0);
    assert_eq!(out[1].top, 432.0);
    assert_eq!(out[1].height, 24.0);
    assert_eq!(out[1].left_pct, 50.0);
    assert_eq!(out[1].start, "09:00");
    assert_eq!(GeometryOptions { pixels_per_hour: 48.0 }.day_height(), 1152.0);
}

#[test]
fn test_block_geometry_rejects_mismatched_inputs() {
    let events = vec![ev("a", "08:00", "10:00")];
    assert!(blocks(&events, &[], &GeometryOptions::default()).is_err());

    let results = layout(&events).unwrap();
    for pph in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert!(blocks(&events, &results, &GeometryOptions { pixels_per_hour: pph }).is_err());
    }
}

#[test]
fn test_concurrency_profile_windows() {
    let events = vec![
        ev("a", "08:00", "10:00"),
        ev("b", "09:00", "09:30"),
        ev("c", "12:00", "13:00"),
        ev("d", "12:30", "12:45"),
    ];
    let profile = concurrency_profile(&events);
    assert_eq!(profile.peak, 2);
    assert_eq!(profile.windows, vec![(540, 570), (750, 765)]);
}

#[test]
fn test_concurrency_profile_merges_touching_windows() {
    // b ends exactly when c starts, so the peak of 2 is one window
    let events = vec![
        ev("a", "08:00", "11:00"),
        ev("b", "09:00", "10:00"),
        ev("c", "10:00", "10:30"),
    ];
    let profile = concurrency_profile(&events);
    assert_eq!(profile.peak, 2);
    assert_eq!(profile.windows, vec![(540, 630)]);
}

#[test]
fn test_concurrency_profile_empty() {
    let profile = concurrency_profile(&[]);
    assert_eq!(profile.peak, 0);
    assert!(profile.windows.is_empty());
}

#[test]
fn test_parse_records_all_formats() {
    let json = parse_records(SAMPLE_JSON, InputFormat::Json).unwrap();
    assert_eq!(json.len(), 4);
    assert_eq!(json[1].title, "Dentist");

    let wrapped = r#"{ "events": [ { "id": "x", "start": "07:00", "end": "08:00" } ] }"#;
    let json = parse_records(wrapped, InputFormat::Json).unwrap();
    assert_eq!(json[0].title, "");

    let yaml = "- id: a\n  start: \"08:00\"\n  end: \"09:00\"\n- id: b\n  title: Gym\n  start: \"18:00\"\n  end: \"19:00\"\n";
    let yaml = parse_records(yaml, InputFormat::Yaml).unwrap();
    assert_eq!(yaml[1].title, "Gym");

    let csv = "id,title,start,end\na, Call ,08:00,08:30\nb,,09:00,24:00\n";
    let csv = parse_records(csv, InputFormat::Csv).unwrap();
    assert_eq!(csv[0].title, "Call");
    assert_eq!(csv[1].end, "24:00");
}

#[test]
fn test_input_format_from_extension() {
    use std::path::Path;
    assert_eq!(InputFormat::from_path(Path::new("day.JSON")).unwrap(), InputFormat::Json);
    assert_eq!(InputFormat::from_path(Path::new("day.yml")).unwrap(), InputFormat::Yaml);
    assert!(matches!(
        InputFormat::from_path(Path::new("day.txt")),
        Err(AppError::UnsupportedInput(_))
    ));
}
