// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, ErrorMessage, inputs)
// - search.rs: SearchBar
// - client.rs: ClientList, ClientRow, AddClientForm
// - car.rs: CarList, CarCard, AddCarForm

pub mod car;
pub mod client;
pub mod common;
pub mod search;

// Re-export commonly used components for convenience
pub use car::*;
pub use client::*;
pub use common::*;
pub use search::*;
