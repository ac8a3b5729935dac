//! End-to-end: bundled sample documents → map document on disk.

use std::path::PathBuf;

use tempfile::tempdir;

use tetramap::analysis::{compare_profiles, rank_neighbours};
use tetramap::embedding::StressConfig;
use tetramap::model::MapEntry;
use tetramap::runtime::io::{load_dataset, write_map};
use tetramap::runtime::pipeline::{MapPipeline, PipelineConfig};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn load_sample() -> tetramap::model::Dataset {
    let dir = data_dir();
    load_dataset(&dir.join("dimensions.json"), &dir.join("systems.json"))
        .expect("sample documents load")
}

#[test]
fn sample_map_document() {
    let dataset = load_sample();
    let result = MapPipeline::new(PipelineConfig::default())
        .run(&dataset)
        .expect("pipeline runs");

    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("systems_map.json");
    write_map(&out, &result.entries).expect("writes");

    let text = std::fs::read_to_string(&out).expect("readable");
    let entries: Vec<MapEntry> = serde_json::from_str(&text).expect("valid json");
    assert_eq!(entries.len(), dataset.profiles.len());

    for (entry, profile) in entries.iter().zip(dataset.profiles.iter()) {
        assert_eq!(entry.name, profile.name);
        assert_eq!(entry.description, profile.description);
        assert_eq!(entry.profile, profile.profile);
        assert!(entry.x.abs() <= 90.0 + 1e-9);
        assert!(entry.y.abs() <= 90.0 + 1e-9);
    }

    let max_x = entries.iter().map(|e| e.x).fold(f64::MIN, f64::max);
    let min_y = entries.iter().map(|e| e.y).fold(f64::MAX, f64::min);
    assert!((max_x - 90.0).abs() < 1e-9);
    assert!((min_y + 90.0).abs() < 1e-9);
}

#[test]
fn sample_layout_reflects_similarity() {
    let dataset = load_sample();
    let result = MapPipeline::new(PipelineConfig::default())
        .run(&dataset)
        .expect("pipeline runs");

    let idx = |name: &str| dataset.profile_index(name).expect("profile present");
    let raw = &result.raw_layout;
    let idealism = raw[idx("Idealism")];
    let dualism = raw[idx("Dualism")];
    let physicalism = raw[idx("Physicalism")];

    // Idealism and Dualism differ on one dimension by one corner step.
    assert!(idealism.distance(&dualism) < idealism.distance(&physicalism));
}

#[test]
fn parallel_run_writes_identical_document() {
    let dataset = load_sample();
    let seq = MapPipeline::new(PipelineConfig::default())
        .run(&dataset)
        .expect("pipeline runs");
    let par = MapPipeline::new(PipelineConfig {
        stress: StressConfig {
            parallel: true,
            ..Default::default()
        },
        ..Default::default()
    })
    .run(&dataset)
    .expect("pipeline runs");
    assert_eq!(seq.entries, par.entries);
}

#[test]
fn sample_comparisons() {
    let dataset = load_sample();
    let a = &dataset.profiles[dataset.profile_index("Idealism").expect("present")];
    let b = &dataset.profiles[dataset.profile_index("Dualism").expect("present")];
    let cmp = compare_profiles(&dataset.dimensions, a, b);
    assert_eq!(cmp.total_distance, 1);
    assert_eq!(cmp.max_distance, 6);
    assert_eq!(cmp.similarity_percent, 83);

    let ranked = rank_neighbours(&dataset.dimensions, &dataset.profiles, dataset.profile_index("Idealism").expect("present"));
    assert_eq!(ranked[0].name, "Dualism");
    assert_eq!(ranked.len(), dataset.profiles.len() - 1);
}
