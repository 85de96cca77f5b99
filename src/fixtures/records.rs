// fixtures/records.rs - Clients and cars sample data
//
// Car 4 points at client 99, which does not exist, so owner lookups can be
// checked against the fallback label.

use super::SampleSet;
use crate::web_app::model::{Car, Client};

pub struct SampleClients;

impl SampleSet for SampleClients {
    type Record = Client;

    fn records() -> Vec<Client> {
        vec![
            client(1, "Ana", 30),
            client(2, "Bruno Costa", 45),
            client(3, "Chloé Martin", 27),
        ]
    }
}

pub struct SampleCars;

impl SampleSet for SampleCars {
    type Record = Car;

    fn records() -> Vec<Car> {
        vec![
            car(10, "Peugeot", "208", "123-TU-4567", 1),
            car(11, "Renault", "Clio", "88-TU-1001", 2),
            car(12, "Volkswagen", "Polo", "201-TU-77", 2),
            car(13, "Kia", "Picanto", "5-TU-300", 99),
        ]
    }
}

fn client(id: i64, name: &str, age: i32) -> Client {
    Client {
        id,
        name: name.to_string(),
        age,
    }
}

fn car(id: i64, brand: &str, model: &str, matricule: &str, client_id: i64) -> Car {
    Car {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        matricule: matricule.to_string(),
        client_id: Some(client_id),
    }
}
