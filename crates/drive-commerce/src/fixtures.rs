//! Shared test fixtures.

use crate::catalog::Vehicle;
use crate::session::SessionUser;

pub fn sedan_json() -> &'static str {
    r#"{
        "id": "V1",
        "name": "Astra",
        "description": "Compact sedan",
        "primaryImage": "https://img/astra.jpg",
        "otherImages": null,
        "availableQuantity": 3,
        "manufacturer": {"name": "Opel"},
        "model": {"name": "Astra K"},
        "vehicleTypes": [{"id": "t1", "name": "Base"}, {"id": "t2", "name": "Sport"}],
        "features": [{
            "id": "F1",
            "engineType": "Petrol",
            "transmission": "Manual",
            "horsepower": 110,
            "torque": 170,
            "fuelEfficiency": 18.5,
            "dimensions": "4.3m",
            "weight": 1200,
            "safetyFeatures": ["ABS", "Airbags"],
            "infotainment": null,
            "vehicleType": {"id": "t1"}
        }],
        "vehiclePrices": [
            {"id": "P1", "price": 500000, "vehicleType": {"id": "t1", "name": "Base"}},
            {"id": "P2", "price": 650000, "vehicleType": {"id": "t2", "name": "Sport"}},
            {"id": "P3", "price": 1, "vehicleType": {"id": "t2", "name": "Sport"}}
        ]
    }"#
}

pub fn sedan() -> Vehicle {
    serde_json::from_str(sedan_json()).unwrap()
}

pub fn asha() -> SessionUser {
    SessionUser::new("U1", "Asha")
}
