//! Serializing measures with and without their unit symbol.

use measure::{Currents, Temperatures, CELSIUS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Sample {
    current: Currents,
    #[serde(with = "measure::serde_with_unit")]
    temperature: Temperatures,
}

fn main() {
    let sample = Sample {
        current: Currents::of(1.25).unwrap(),
        temperature: CELSIUS.measure(21.5).unwrap(),
    };
    let json = serde_json::to_string_pretty(&sample).unwrap();
    println!("{json}");

    let back: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(back.current, sample.current);
    assert_eq!(back.temperature, sample.temperature);

    // Any temperature symbol is accepted on input.
    let fahrenheit = r#"{"current":1.25,"temperature":{"value":70.7,"unit":"°F"}}"#;
    let converted: Sample = serde_json::from_str(fahrenheit).unwrap();
    println!("{}", converted.temperature.in_units(&CELSIUS));
}
