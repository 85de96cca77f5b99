// fixtures/mod.rs - Sample records for tests
//
// One consistent data set of clients and the cars they own. Tests use it as
// fake service responses and as httpmock JSON bodies, so every test suite
// agrees on ids and names.

pub mod records;

pub use records::{SampleCars, SampleClients};

/// A fixed set of records as a resource service would return them
pub trait SampleSet {
    type Record: serde::Serialize;

    fn records() -> Vec<Self::Record>;

    /// The records as the JSON array a GET endpoint returns
    fn json() -> serde_json::Value {
        serde_json::to_value(Self::records()).unwrap_or_default()
    }
}
