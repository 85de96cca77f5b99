// web_app/pages/mod.rs - Page components module
//
// - DashboardPage: both lists side by side
// - ClientsPage / CarsPage: one list each

pub mod dashboard;

// Re-export page components
pub use dashboard::{CarsPage, ClientsPage, DashboardPage};
