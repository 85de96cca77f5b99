// Model tests
// Search filtering, owner lookup and display labels over the sample data set.

use fleet_console::fixtures::{SampleCars, SampleClients, SampleSet};
use fleet_console::web_app::model::{
    filter_records, owner_name, Car, Client, NewCar, NewClient, Searchable, UNKNOWN_OWNER,
};

fn client_names(clients: &[Client]) -> Vec<&str> {
    clients.iter().map(|c| c.name.as_str()).collect()
}

fn car_ids(cars: &[Car]) -> Vec<i64> {
    cars.iter().map(|c| c.id).collect()
}

// ===== Search filtering =====

#[test]
fn test_empty_term_keeps_every_record_in_order() {
    let clients = SampleClients::records();
    assert_eq!(filter_records(&clients, ""), clients);

    let cars = SampleCars::records();
    assert_eq!(filter_records(&cars, ""), cars);
}

#[test]
fn test_client_search_ignores_case() {
    let clients = SampleClients::records();

    assert_eq!(client_names(&filter_records(&clients, "ana")), vec!["Ana"]);
    assert_eq!(client_names(&filter_records(&clients, "ANA")), vec!["Ana"]);
    assert_eq!(client_names(&filter_records(&clients, "costa")), vec!["Bruno Costa"]);
}

#[test]
fn test_client_search_matches_substrings() {
    let clients = SampleClients::records();

    // "ar" appears in "Martin" only
    assert_eq!(client_names(&filter_records(&clients, "ar")), vec!["Chloé Martin"]);
    // "n" appears in all three names
    assert_eq!(filter_records(&clients, "n").len(), 3);
}

#[test]
fn test_client_search_does_not_look_at_age() {
    let clients = SampleClients::records();
    assert!(filter_records(&clients, "30").is_empty());
}

#[test]
fn test_car_search_covers_brand_model_and_matricule() {
    let cars = SampleCars::records();

    assert_eq!(car_ids(&filter_records(&cars, "peugeot")), vec![10]);
    assert_eq!(car_ids(&filter_records(&cars, "clio")), vec![11]);
    assert_eq!(car_ids(&filter_records(&cars, "201-tu")), vec![12]);
    // Every sample matricule contains "TU"
    assert_eq!(car_ids(&filter_records(&cars, "tu")), vec![10, 11, 12, 13]);
}

#[test]
fn test_car_search_does_not_look_at_owner() {
    let cars = SampleCars::records();
    assert!(filter_records(&cars, "Bruno").is_empty());
}

#[test]
fn test_unmatched_term_gives_empty_list() {
    assert!(filter_records(&SampleClients::records(), "zzz").is_empty());
    assert!(filter_records(&SampleCars::records(), "zzz").is_empty());
}

#[test]
fn test_filter_matches_its_definition_for_many_terms() {
    let clients = SampleClients::records();
    let cars = SampleCars::records();
    let terms = [
        "", "a", "A", "an", "Bru", "MARTIN", "é", "o", "208", "pol", "KIA", "-", "88", "xyz",
    ];

    for term in terms {
        let needle = term.to_lowercase();

        let expected: Vec<Client> = clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        assert_eq!(filter_records(&clients, term), expected, "clients, term {:?}", term);

        let expected: Vec<Car> = cars
            .iter()
            .filter(|c| {
                c.brand.to_lowercase().contains(&needle)
                    || c.model.to_lowercase().contains(&needle)
                    || c.matricule.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        assert_eq!(filter_records(&cars, term), expected, "cars, term {:?}", term);
    }
}

#[test]
fn test_searchable_fields() {
    let car = &SampleCars::records()[0];
    assert_eq!(car.search_fields(), vec!["Peugeot", "208", "123-TU-4567"]);
    assert!(car.matches_lowercase("peug"));
    assert!(!car.matches_lowercase("renault"));
}

// ===== Owner lookup =====

#[test]
fn test_owner_name_resolves_known_clients() {
    let clients = SampleClients::records();
    assert_eq!(owner_name(&clients, Some(1)), "Ana");
    assert_eq!(owner_name(&clients, Some(2)), "Bruno Costa");
}

#[test]
fn test_owner_name_falls_back_for_unknown_client() {
    let clients = SampleClients::records();
    assert_eq!(owner_name(&clients, Some(99)), UNKNOWN_OWNER);
    assert_eq!(owner_name(&clients, None), UNKNOWN_OWNER);
    assert_eq!(owner_name(&[], Some(1)), "Unknown Owner");
}

// ===== Labels and wire format =====

#[test]
fn test_display_labels() {
    let ana = &SampleClients::records()[0];
    assert_eq!(ana.age_label(), "Age: 30");
    assert_eq!(ana.option_label(), "Ana (Age: 30)");

    let peugeot = &SampleCars::records()[0];
    assert_eq!(peugeot.title(), "Peugeot 208");
    assert_eq!(peugeot.matricule_label(), "Matricule: 123-TU-4567");
}

#[test]
fn test_car_uses_client_id_in_camel_case() {
    let car: Car = serde_json::from_str(
        r#"{"id":5,"brand":"Fiat","model":"Panda","matricule":"9-TU-9","clientId":3}"#,
    )
    .unwrap();
    assert_eq!(car.client_id, Some(3));

    let body = serde_json::to_value(NewCar {
        brand: "Fiat".to_string(),
        model: "Panda".to_string(),
        matricule: "9-TU-9".to_string(),
        client_id: 3,
    })
    .unwrap();
    assert_eq!(body["clientId"], 3);
    assert!(body.get("client_id").is_none());
}

#[test]
fn test_new_client_body() {
    let body = serde_json::to_value(NewClient {
        name: "Ana".to_string(),
        age: 30,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"name": "Ana", "age": 30}));
}
