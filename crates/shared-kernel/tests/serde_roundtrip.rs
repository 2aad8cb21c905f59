use mx_numplan_shared_kernel::{Category, DigitLength, Numeral};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    start: Numeral,
    digits: DigitLength,
    category: Category,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        start: "0012".parse().expect("valid numeral"),
        digits: DigitLength::new(4).expect("valid length"),
        category: Category::Mobile,
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert!(json.contains("\"0012\""));
    assert!(json.contains("\"mobile\""));
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn digit_length_rejects_out_of_range_values() {
    assert!(serde_json::from_str::<DigitLength>("0").is_err());
    assert!(serde_json::from_str::<DigitLength>("10").is_ok());
}
