use crate::harness::Scenario;
use serde_json::json;

#[test]
fn test_each_dispatch_gets_one_record_with_type_and_payload() {
    Scenario::new("each_dispatch_gets_one_record")
        .visit("/")
        .dispatch_creator("addItem", vec![json!("milk")])
        .assert_log_record(0, "dispatch", "Dispatch", "items/add")
        .assert_log_detail_field(0, "type", json!("items/add"))
        .assert_log_detail_field(0, "payload", json!("milk"))
        .assert_log_detail_field(0, "action", json!({"type": "items/add", "payload": "milk"}))
        .run()
        .expect("scenario should pass");
}

#[test]
fn test_payloadless_actions_log_a_null_payload() {
    Scenario::new("payloadless_actions_log_a_null_payload")
        .visit("/")
        .dispatch_creator("reset", vec![])
        .assert_log_record(0, "dispatch", "Dispatch", "reset")
        .assert_log_detail_field(0, "payload", json!(null))
        .assert_log_detail_field(0, "action", json!({"type": "reset"}))
        .run()
        .unwrap();
}

#[test]
fn test_dispatch_logging_can_be_silenced() {
    Scenario::new("dispatch_logging_can_be_silenced")
        .without_dispatch_logging()
        .visit("/")
        .dispatch_creator("addItem", vec![json!("milk")])
        .assert_items(vec![json!("milk")])
        .assert_log_count("dispatch", 0)
        .run()
        .unwrap();
}

#[test]
fn test_visit_logging_can_be_silenced_without_losing_the_seed() {
    Scenario::new("visit_logging_can_be_silenced")
        .without_visit_logging()
        .visit_seeded("/", json!({"items": ["milk"]}))
        .assert_log_count("seeded_visit", 0)
        .assert_state(json!({"items": ["milk"]}))
        .run()
        .unwrap();
}

#[test]
fn test_seeded_visit_emits_one_record() {
    Scenario::new("seeded_visit_emits_one_record")
        .visit_seeded("/", json!({"items": []}))
        .assert_log_count("seeded_visit", 1)
        .assert_log_record(0, "seeded_visit", "Store", "initialized state")
        .assert_log_detail_field(0, "state", json!({"items": []}))
        .run()
        .unwrap();
}
