//! Graph and trip documents read by the `solve` command.
//!
//! Both documents are JSON unless the path ends in `.yaml` or `.yml`.

use std::collections::BTreeMap;
use std::io::Read;

use camino::Utf8Path;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stopover_core::{CostWeights, Edge, Graph, SolveRequest};
use thiserror::Error;

/// Serialization format chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON, the default.
    Json,
    /// YAML, for `.yaml` and `.yml` paths.
    Yaml,
}

/// Decoding or encoding failure in either format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// YAML failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl DocumentFormat {
    /// Pick the format for `path` by its extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use stopover_cli::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("trip.YML")), DocumentFormat::Yaml);
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("graph.json")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("graph")), DocumentFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Decode a document from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the input is malformed or has the wrong
    /// shape.
    pub fn decode<T, R>(self, reader: R) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        match self {
            Self::Json => Ok(serde_json::from_reader(reader)?),
            Self::Yaml => Ok(serde_yaml::from_reader(reader)?),
        }
    }

    /// Encode `value` as a human-readable document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when `value` cannot be represented.
    pub fn encode<T: Serialize>(self, value: &T) -> Result<String, FormatError> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Pairwise distance table: `distances.<from>.<to>`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GraphDocument {
    /// Outgoing entries keyed by source, then target.
    pub distances: BTreeMap<String, BTreeMap<String, EdgeEntry>>,
}

/// One `from -> to` entry of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EdgeEntry {
    /// Measured travel between the two locations.
    Metrics {
        /// Distance in kilometres.
        distance_km: f64,
        /// Duration in minutes.
        duration_min: f64,
    },
    /// Marker left where no measurement was obtained, usually `"Error"`.
    Unavailable(String),
}

impl GraphDocument {
    /// Whether `location` has an entry in the table.
    #[must_use]
    pub fn lists(&self, location: &str) -> bool {
        self.distances.contains_key(location)
    }

    /// Build the in-memory graph, leaving out unavailable entries.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for (from, targets) in &self.distances {
            for (to, entry) in targets {
                match entry {
                    EdgeEntry::Metrics {
                        distance_km,
                        duration_min,
                    } => {
                        graph.insert_edge(from.clone(), to.clone(), Edge::new(*distance_km, *duration_min));
                    }
                    EdgeEntry::Unavailable(marker) => {
                        log::warn!("skipping unavailable edge {from} -> {to} ({marker})");
                    }
                }
            }
        }
        graph
    }
}

/// Trip description: endpoints, required stops and cost weights.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripDocument {
    /// Where the route begins.
    pub start_location: String,
    /// Where the route ends.
    pub end_location: String,
    /// Locations to visit in between, in any order.
    #[serde(default)]
    pub required_stops: Vec<String>,
    /// Cost weights.
    pub weights: WeightsDocument,
}

/// Weights as written in a trip file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WeightsDocument {
    /// Weight per kilometre.
    pub distance_km: f64,
    /// Weight per minute.
    pub duration_min: f64,
}

impl TripDocument {
    /// Every location the trip mentions, labelled with its role.
    pub fn locations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("start", self.start_location.as_str()),
            ("end", self.end_location.as_str()),
        ]
        .into_iter()
        .chain(
            self.required_stops
                .iter()
                .map(|stop| ("required stop", stop.as_str())),
        )
    }

    /// Convert into a solver request.
    #[must_use]
    pub fn into_request(self) -> SolveRequest {
        SolveRequest::new(
            self.start_location,
            self.end_location,
            self.required_stops,
            CostWeights::new(self.weights.distance_km, self.weights.duration_min),
        )
    }
}
