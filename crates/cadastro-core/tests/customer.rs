use cadastro_core::models::customer::{CustomerId, CustomerRecord, NewCustomer};

#[test]
fn record_from_service_response() {
    let json = r#"{
        "id": "65a1f0",
        "name": "Ana",
        "address": "Rua A",
        "city": "SP",
        "date_of_birth": "2000-01-01T00:00:00.000Z",
        "phone": "111",
        "email": "a@a.com",
        "status": true,
        "created_at": "2024-03-01T10:00:00.000Z",
        "updated_at": "2024-03-01T10:00:00.000Z"
    }"#;

    let record: CustomerRecord = serde_json::from_str(json).expect("valid record");
    assert_eq!(record.id, CustomerId::new("65a1f0"));
    assert!(record.status);
    assert_eq!(
        record.date_of_birth.as_deref(),
        Some("2000-01-01T00:00:00.000Z")
    );
}

#[test]
fn optional_metadata_defaults_when_absent() {
    let json = r#"{
        "id": 42,
        "name": "Bia",
        "address": "Rua B",
        "city": "RJ",
        "date_of_birth": null,
        "phone": "222",
        "email": "b@b.com"
    }"#;

    let record: CustomerRecord = serde_json::from_str(json).expect("valid record");
    assert_eq!(record.id.as_str(), "42");
    assert!(!record.status);
    assert!(record.date_of_birth.is_none());
    assert!(record.created_at.is_none());
}

#[test]
fn payload_wire_shape() {
    let payload = NewCustomer {
        name: "Ana".to_string(),
        address: "Rua A".to_string(),
        city: "SP".to_string(),
        date_of_birth: Some("1990-05-20T00:00:00Z".parse().expect("timestamp")),
        phone: "111".to_string(),
        email: "a@a.com".to_string(),
    };

    let json = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ana",
            "address": "Rua A",
            "city": "SP",
            "date_of_birth": "1990-05-20T00:00:00Z",
            "phone": "111",
            "email": "a@a.com",
        })
    );
}
