//! Focused unit tests covering CLI configuration and dataset validation.

use super::helpers::{OfflineServiceBuilder, SAMPLE_DATASET, Workspace};
use super::*;
use crate::recommend::{RecommendArgs, RecommendConfig, run_recommend_with};
use crate::service::EngineSettings;
use camino::Utf8PathBuf;
use clap::Parser;
use hotelier_core::Persona;
use rstest::rstest;

#[rstest]
fn converting_recommend_without_city_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing city should error");
    assert!(
        matches!(
            err,
            CliError::MissingArgument { field, env } if field == ARG_CITY && env == ENV_RECOMMEND_CITY
        ),
        "expected MissingArgument, found {err:?}"
    );
}

#[rstest]
fn recommend_config_applies_defaults() {
    let args = RecommendArgs {
        city: Some("Goa".to_owned()),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");

    assert_eq!(config.engine.dataset, Utf8PathBuf::from("hotels.json"));
    assert_eq!(config.engine.geocoder_url, "https://nominatim.openstreetmap.org");
    assert_eq!(config.request.persona, None);
    assert!(config.request.preferences.is_empty());
}

#[rstest]
#[case("family", Some(Persona::Family))]
#[case(" COUPLE ", Some(Persona::Couple))]
#[case("backpacker", None)]
fn personas_parse_leniently(#[case] raw: &str, #[case] expected: Option<Persona>) {
    let args = RecommendArgs {
        city: Some("Delhi".to_owned()),
        persona: Some(raw.to_owned()),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.request.persona, expected);
}

#[rstest]
fn recommend_flags_populate_the_filter_set() {
    let cli = Cli::try_parse_from([
        "hotelier",
        "recommend",
        "--city",
        "Mumbai",
        "--preference",
        "sea view",
        "--preference",
        "bar",
        "--price-min",
        "1000",
        "--price-max",
        "7000",
        "--stars",
        "4",
        "--stars",
        "5",
        "--rating-min",
        "8.5",
        "--area",
        "Colaba",
        "--extra",
        "late checkout",
    ])
    .expect("arguments should parse");
    let Command::Recommend(args) = cli.command else {
        unreachable!("expected the recommend command");
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    let filters = &config.request.filters;
    assert_eq!(config.request.preferences, vec!["sea view", "bar"]);
    assert_eq!((filters.price_min, filters.price_max), (Some(1000.0), Some(7000.0)));
    assert_eq!(filters.star_ratings, vec![4, 5]);
    assert_eq!(filters.avg_rating_min, Some(8.5));
    assert_eq!(filters.avg_rating_max, None);
    assert_eq!(filters.area.as_deref(), Some("Colaba"));
    assert_eq!(filters.extra_requirements.as_deref(), Some("late checkout"));
}

#[rstest]
fn validate_sources_reports_missing_dataset() {
    let workspace = Workspace::new();
    let settings = EngineSettings {
        dataset: workspace.dataset_path(),
        geocoder_url: "http://localhost:8080".to_owned(),
    };

    let err = settings.validate_sources().expect_err("dataset is missing");
    assert!(
        matches!(&err, CliError::MissingDataset { field, .. } if *field == ARG_DATASET),
        "expected MissingDataset, found {err:?}"
    );
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let settings = EngineSettings {
        dataset: workspace.root().to_path_buf(),
        geocoder_url: "http://localhost:8080".to_owned(),
    };

    let err = settings.validate_sources().expect_err("dataset is a directory");
    assert!(
        matches!(&err, CliError::DatasetNotFile { .. }),
        "expected DatasetNotFile, found {err:?}"
    );
}

#[rstest]
fn recommend_writes_pretty_json() {
    let workspace = Workspace::new();
    let dataset = workspace.write_dataset(SAMPLE_DATASET);
    let args = RecommendArgs {
        dataset: Some(dataset),
        city: Some("Delhi".to_owned()),
        persona: Some("family".to_owned()),
        preferences: vec!["pool".to_owned()],
        ..RecommendArgs::default()
    };
    let mut buffer = Vec::new();

    run_recommend_with(args, &OfflineServiceBuilder, &mut buffer).expect("command succeeds");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(value["recommendations"][0]["name"], "Lotus Inn");
    assert_eq!(value["recommendations"][0]["finalScore"], 80);
    assert_eq!(value["insights"]["totalHotels"], 1);
    assert!(stdout.ends_with('\n'));
}
