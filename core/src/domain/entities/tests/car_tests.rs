//! Unit tests for the car entity

use crate::domain::entities::car::Car;

#[test]
fn test_car_uses_capitalised_field_names() {
    let car = Car::new("Toyota", "Corolla", 2019, "Red");
    let json = serde_json::to_value(&car).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "Brand": "Toyota",
            "Model": "Corolla",
            "Year": 2019,
            "Color": "Red"
        })
    );
}

#[test]
fn test_car_accepts_lowercase_and_missing_fields() {
    let car: Car = serde_json::from_str(r#"{"brand": "Volvo", "Year": 1999}"#).unwrap();

    assert_eq!(car.brand, "Volvo");
    assert_eq!(car.year, 1999);
    assert_eq!(car.model, "");
    assert_eq!(car.color, "");
}
