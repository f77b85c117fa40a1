// crates/shared-kernel/tests/serde_transparent.rs
use serde::{Deserialize, Serialize};
use student_analytics_shared_kernel::{Age, FirstName, Grade, StudentCount};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Row {
    name: FirstName,
    age: Age,
    grade: Grade,
    seen: StudentCount,
}

#[test]
fn value_objects_serialize_as_plain_json_scalars() {
    let row = Row {
        name: FirstName::new("Ann"),
        age: Age::new(22),
        grade: Grade::new(60),
        seen: StudentCount::from(2),
    };
    let json = serde_json::to_value(&row).expect("serializes");
    assert_eq!(json, serde_json::json!({ "name": "Ann", "age": 22, "grade": 60, "seen": 2 }));

    let decoded: Row = serde_json::from_value(json).expect("deserializes");
    assert_eq!(decoded, row);
}

#[test]
fn negative_age_is_rejected() {
    let result = serde_json::from_str::<Age>("-1");
    assert!(result.is_err());
}
