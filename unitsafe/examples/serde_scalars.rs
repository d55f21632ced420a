//! Scalars serialize with their display unit.
//!
//! Run with: cargo run --example serde_scalars --features serde

#[cfg(feature = "serde")]
fn main() {
    use unitsafe::{absolute_temperature, length, AbsScalar, AbsoluteTemperature, Length, RelScalar};

    let d = RelScalar::new(2.5, length::KILOMETER);
    let json = serde_json::to_string(&d).unwrap();
    println!("{}", json);

    let back: RelScalar<Length> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);

    let t: AbsScalar<AbsoluteTemperature> = serde_json::from_str(r#"{"value": 21.5, "unit": "°C"}"#).unwrap();
    println!("{} = {} K", t, t.in_unit(absolute_temperature::KELVIN));

    let bad = serde_json::from_str::<RelScalar<Length>>(r#"{"value": 1.0, "unit": "s"}"#);
    println!("unknown unit: {}", bad.unwrap_err());
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_scalars --features serde");
}
