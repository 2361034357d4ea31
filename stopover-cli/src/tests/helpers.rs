//! Test helpers writing graph and trip files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::input::{DocumentFormat, EdgeEntry, GraphDocument, TripDocument, WeightsDocument};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// The six-edge example as a graph document, with `E` listed as a source
/// whose only entry is unavailable.
pub(super) fn example_graph_document() -> GraphDocument {
    let mut document = GraphDocument::default();
    let edges = [
        ("S", "A", 1.0, 1.0),
        ("A", "B", 2.0, 2.0),
        ("B", "E", 1.0, 1.0),
        ("S", "B", 5.0, 5.0),
        ("B", "A", 5.0, 5.0),
        ("A", "E", 1.0, 1.0),
    ];
    for (from, to, distance_km, duration_min) in edges {
        document.distances.entry(from.to_owned()).or_default().insert(
            to.to_owned(),
            EdgeEntry::Metrics {
                distance_km,
                duration_min,
            },
        );
    }
    document
        .distances
        .entry("E".to_owned())
        .or_default()
        .insert("S".to_owned(), EdgeEntry::Unavailable("Error".to_owned()));
    document
}

pub(super) fn trip(start: &str, end: &str, stops: &[&str]) -> TripDocument {
    TripDocument {
        start_location: start.to_owned(),
        end_location: end.to_owned(),
        required_stops: stops.iter().map(|&stop| stop.to_owned()).collect(),
        weights: WeightsDocument {
            distance_km: 1.0,
            duration_min: 0.0,
        },
    }
}

pub(super) fn write_document<T: serde::Serialize>(path: &Utf8Path, document: &T) {
    let payload = DocumentFormat::from_path(path)
        .encode(document)
        .expect("encode fixture document");
    write_utf8(path, payload.as_bytes());
}
