//! Behaviour-driven step definitions driving the CLI subcommands.

use super::helpers::{OfflineServiceBuilder, SAMPLE_DATASET, Workspace};
use super::*;
use crate::listing::{run_cities_with, run_search_with};
use crate::recommend::run_recommend_with;
use camino::Utf8PathBuf;
use clap::Parser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
struct CommandWorld {
    workspace: Workspace,
    dataset_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let dataset_path = workspace.dataset_path();
        Self {
            workspace,
            dataset_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, subcommand_args: &[&str]) {
        let mut argv = vec!["hotelier".to_owned()];
        argv.extend(subcommand_args.iter().map(|arg| (*arg).to_owned()));
        argv.push(format!("--{ARG_DATASET}"));
        argv.push(self.dataset_path.to_string());

        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            match cli.command {
                Command::Recommend(args) => {
                    run_recommend_with(args, &OfflineServiceBuilder, &mut *buffer)
                }
                Command::Cities(args) => run_cities_with(args, &OfflineServiceBuilder, &mut *buffer),
                Command::Search(args) => run_search_with(args, &OfflineServiceBuilder, &mut *buffer),
            }
        });
        self.result.replace(Some(outcome));
    }

    fn printed_json(&self) -> Value {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

#[given("a dataset file with a Delhi pool hotel and a Mumbai seafront hotel")]
fn dataset_file_exists(#[from(world)] world: &CommandWorld) {
    world.workspace.write_dataset(SAMPLE_DATASET);
}

#[when("I run the recommend command for a family wanting a pool in Delhi")]
fn run_family_recommendation(#[from(world)] world: &CommandWorld) {
    world.run(&[
        "recommend",
        "--persona",
        "family",
        "--city",
        "Delhi",
        "--preference",
        "pool",
    ]);
}

#[when("I run the recommend command without a city")]
fn run_recommendation_without_city(#[from(world)] world: &CommandWorld) {
    world.run(&["recommend", "--persona", "solo"]);
}

#[when("I run the cities command")]
fn run_cities_command(#[from(world)] world: &CommandWorld) {
    world.run(&["cities"]);
}

#[when("I run the search command for mumbai")]
fn run_search_command(#[from(world)] world: &CommandWorld) {
    world.run(&["search", "--city", "mumbai"]);
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    assert!(result.is_ok(), "expected success, found {result:?}");
}

#[then("the printed recommendations start with Lotus Inn scoring 80")]
fn printed_recommendations(#[from(world)] world: &CommandWorld) {
    let output = world.printed_json();
    let top = &output["recommendations"][0];
    assert_eq!(top["name"], "Lotus Inn");
    assert_eq!(top["finalScore"], 80);
}

#[then("the command fails because the city is missing")]
fn command_fails_missing_city(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let outcome = borrowed.as_ref().expect("result recorded");
    assert!(
        matches!(
            outcome,
            Err(CliError::MissingArgument { field, .. }) if *field == ARG_CITY
        ),
        "expected MissingArgument, found {}",
        world.error()
    );
}

#[then("the command fails because the dataset file is missing")]
fn command_fails_missing_dataset(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let outcome = borrowed.as_ref().expect("result recorded");
    assert!(
        matches!(
            outcome,
            Err(CliError::MissingDataset { field, .. }) if *field == ARG_DATASET
        ),
        "expected MissingDataset, found {}",
        world.error()
    );
}

#[then("the printed cities are Delhi and Mumbai")]
fn printed_cities(#[from(world)] world: &CommandWorld) {
    let cities: Vec<String> =
        serde_json::from_value(world.printed_json()).expect("a list of city names");
    assert_eq!(cities, vec!["Delhi", "Mumbai"]);
}

#[then("the printed hotels are only Harbour View")]
fn printed_hotels(#[from(world)] world: &CommandWorld) {
    let output = world.printed_json();
    let names: Vec<&str> = output
        .as_array()
        .expect("a list of hotels")
        .iter()
        .filter_map(|hotel| hotel["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Harbour View"]);
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/hotelier_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(recommend_happy_path, "recommending hotels from a dataset file");
register_command_scenario!(recommend_missing_city, "rejecting a recommendation without a city");
register_command_scenario!(recommend_missing_dataset, "rejecting a missing dataset file");
register_command_scenario!(cities_listing, "listing the cities in a dataset");
register_command_scenario!(search_listing, "searching the hotels of one city");
