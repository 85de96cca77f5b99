// web_app/model/mod.rs - Shared data models for the console
//
// Records as the resource services serialize them, the payloads sent on
// creation, and the pure helpers the list views render from.

use serde::{Deserialize, Serialize};

pub mod forms;

pub use forms::{submit_draft, CarDraft, ClientDraft, Draft, FormOutcome};

/// Label shown when a car's clientId matches no fetched client
pub const UNKNOWN_OWNER: &str = "Unknown Owner";

/// Client as returned by GET /CLIENT-SERVICE/clients
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Client {
    /// Secondary line of a client row
    pub fn age_label(&self) -> String {
        format!("Age: {}", self.age)
    }

    /// Label of this client in the owner selection control
    pub fn option_label(&self) -> String {
        format!("{} (Age: {})", self.name, self.age)
    }
}

/// Car as returned by GET /voitures
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub matricule: String,
    /// Owning client; the car service does not enforce it
    #[serde(default)]
    pub client_id: Option<i64>,
}

impl Car {
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn matricule_label(&self) -> String {
        format!("Matricule: {}", self.matricule)
    }
}

/// Body of POST /CLIENT-SERVICE/client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub age: i32,
}

/// Body of POST /voiture
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub matricule: String,
    pub client_id: i64,
}

/// A record the search bar can filter
pub trait Searchable {
    /// Text fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Searchable for Car {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.brand, &self.model, &self.matricule]
    }
}

/// Records matching `term`, in fetch order. An empty term keeps everything.
pub fn filter_records<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Linear lookup of a car owner's name
pub fn owner_name(clients: &[Client], client_id: Option<i64>) -> &str {
    client_id
        .and_then(|id| clients.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_OWNER)
}
