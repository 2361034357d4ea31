//! Focused unit tests covering solve configuration, inputs and reports.

use super::helpers::{example_graph_document, trip, workspace, write_document, write_utf8};
use super::*;
use crate::solve::{
    SolveConfig, config_from_layers_for_test, execute_solve, load_document, run_solve_with,
    verify_locations,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use stopover_core::SolveError;
use tempfile::TempDir;

/// Graph and trip files for the six-edge example, in the given extension.
fn example_inputs(extension: &str, stops: &[&str]) -> (TempDir, SolveConfig) {
    let (tmp, root) = workspace();
    let graph = root.join(format!("graph.{extension}"));
    let trip_path = root.join(format!("trip.{extension}"));
    write_document(&graph, &example_graph_document());
    write_document(&trip_path, &trip("S", "E", stops));
    let config = SolveConfig {
        graph,
        trip: trip_path,
        output: None,
        max_candidates: None,
    };
    (tmp, config)
}

#[rstest]
#[case::graph(None, Some("trip.json"), ARG_GRAPH, ENV_GRAPH)]
#[case::trip(Some("graph.json"), None, ARG_TRIP, ENV_TRIP)]
fn converting_without_inputs_errors(
    #[case] graph: Option<&str>,
    #[case] trip_path: Option<&str>,
    #[case] expected_field: &str,
    #[case] expected_env: &str,
) {
    let args = SolveArgs {
        graph: graph.map(Utf8PathBuf::from),
        trip: trip_path.map(Utf8PathBuf::from),
        ..SolveArgs::default()
    };

    let err = SolveConfig::try_from(args).expect_err("missing input should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_trip() {
    let (_tmp, root) = workspace();
    let graph = root.join("graph.json");
    write_utf8(&graph, b"{}");
    let config = SolveConfig {
        graph,
        trip: root.join("trip.json"),
        output: None,
        max_candidates: None,
    };

    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_TRIP),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = workspace();
    let graph = root.join("graph.json");
    std::fs::create_dir(graph.as_std_path()).expect("graph directory");
    let config = SolveConfig {
        graph: graph.clone(),
        trip: root.join("trip.json"),
        output: None,
        max_candidates: None,
    };

    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_GRAPH);
            assert_eq!(path, graph);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
#[case::json("json")]
#[case::yaml("yaml")]
#[case::yml("yml")]
#[expect(clippy::float_cmp, reason = "edge metrics are small integers")]
fn execute_solve_reports_worked_example(#[case] extension: &str) {
    let (_tmp, config) = example_inputs(extension, &["B", "A"]);

    let report = execute_solve(&config).expect("solve succeeds");
    assert_eq!(report.shortest_path, ["S", "A", "B", "E"]);
    assert_eq!(report.total_cost, Some(4.0));
    assert_eq!(report.total_distance_km, 4.0);
    assert_eq!(report.total_duration_min, 4.0);
    assert_eq!(report.candidates_evaluated, 2);
}

#[rstest]
fn unknown_stop_is_rejected_before_solving() {
    let (_tmp, config) = example_inputs("json", &["A", "Harbour"]);

    match execute_solve(&config).expect_err("unknown stop") {
        CliError::UnknownLocation { role, location } => {
            assert_eq!(role, "required stop");
            assert_eq!(location, "Harbour");
        }
        other => panic!("expected UnknownLocation, found {other:?}"),
    }
}

#[rstest]
fn start_is_checked_first() {
    let graph = example_graph_document();
    let err = verify_locations(&graph, &trip("Nowhere", "Elsewhere", &[]))
        .expect_err("unknown start");
    match err {
        CliError::UnknownLocation { role, location } => {
            assert_eq!(role, "start");
            assert_eq!(location, "Nowhere");
        }
        other => panic!("expected UnknownLocation, found {other:?}"),
    }
}

#[rstest]
fn unavailable_entries_surface_as_missing_edges() {
    let (_tmp, config) = example_inputs("json", &[]);
    write_document(&config.trip, &trip("E", "S", &[]));

    match execute_solve(&config).expect_err("E to S is unavailable") {
        CliError::Solve { source } => assert_eq!(source, SolveError::edge_not_found("E", "S")),
        other => panic!("expected Solve, found {other:?}"),
    }
}

#[rstest]
fn candidate_limit_is_forwarded_to_the_solver() {
    let (_tmp, mut config) = example_inputs("json", &["A", "B"]);
    config.max_candidates = Some(1);

    match execute_solve(&config).expect_err("limit exceeded") {
        CliError::Solve {
            source: SolveError::TooManyCandidates { stops, limit },
        } => {
            assert_eq!(stops, 2);
            assert_eq!(limit, 1);
        }
        other => panic!("expected TooManyCandidates, found {other:?}"),
    }
}

#[rstest]
fn load_document_rejects_malformed_yaml() {
    let (_tmp, root) = workspace();
    let path = root.join("graph.yaml");
    write_utf8(&path, b"distances: [unclosed");

    let err = load_document::<crate::GraphDocument>(&path, ARG_GRAPH).expect_err("bad yaml");
    match err {
        CliError::ParseInput { field, path: reported, .. } => {
            assert_eq!(field, ARG_GRAPH);
            assert_eq!(reported, path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_document_io_error_returns_open_error() {
    let (_tmp, root) = workspace();
    let path = root.join("trip.json");

    let err = load_document::<crate::TripDocument>(&path, ARG_TRIP).expect_err("missing trip");
    match err {
        CliError::OpenInput { field, .. } => assert_eq!(field, ARG_TRIP),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn run_solve_writes_json_to_stdout() {
    let (_tmp, config) = example_inputs("json", &["A", "B"]);
    let args = SolveArgs {
        graph: Some(config.graph),
        trip: Some(config.trip),
        ..SolveArgs::default()
    };
    let mut stdout = Vec::new();

    run_solve_with(args, &mut stdout).expect("solve succeeds");
    let report: SolveReport = serde_json::from_slice(&stdout).expect("stdout is a JSON report");
    assert_eq!(report.shortest_path, ["S", "A", "B", "E"]);
}

#[rstest]
fn run_solve_writes_yaml_to_output_file() {
    let (tmp, config) = example_inputs("json", &["A", "B"]);
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let output = root.join("route.yaml");
    let args = SolveArgs {
        graph: Some(config.graph),
        trip: Some(config.trip),
        output: Some(output.clone()),
        max_candidates: None,
    };
    let mut stdout = Vec::new();

    run_solve_with(args, &mut stdout).expect("solve succeeds");
    assert!(stdout.is_empty());
    let text = std::fs::read_to_string(output.as_std_path()).expect("report written");
    let report: SolveReport = serde_yaml::from_str(&text).expect("report is YAML");
    assert_eq!(report.shortest_path, ["S", "A", "B", "E"]);
    assert_eq!(report.candidates_evaluated, 2);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "graph": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "graph": "from-file/graph.yaml",
            "trip": "from-file/trip.yaml",
            "max_candidates": 720,
        }),
        None,
    );
    composer.push_environment(json!({
        "trip": "from-env/trip.json",
    }));
    composer.push_cli(json!({
        "graph": "from-cli/graph.json",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.graph, Utf8PathBuf::from("from-cli/graph.json"));
    assert_eq!(config.trip, Utf8PathBuf::from("from-env/trip.json"));
    assert_eq!(config.output, None);
    assert_eq!(config.max_candidates, Some(720));
}
