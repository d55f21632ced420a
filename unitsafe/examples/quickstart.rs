//! Minimal end-to-end example: positions, lengths and a derived speed.

use unitsafe::{duration, length, position, speed, AbsScalar, RelScalar, Speed};

fn main() {
    let start = AbsScalar::new(1.2, position::KILOMETER);
    let end = AbsScalar::new(3_700.0, position::METER);

    let travelled = end - start;
    assert!((travelled.in_unit(length::METER) - 2_500.0).abs() < 1e-9);

    let elapsed = RelScalar::new(2.5, duration::MINUTE);
    let v = (travelled / elapsed).as_kind::<Speed>().unwrap();
    assert!((v.in_unit(speed::KILOMETER_PER_HOUR) - 60.0).abs() < 1e-9);

    println!("{} -> {}: {} in {} ({})", start, end, travelled, elapsed, v.with_unit(speed::KILOMETER_PER_HOUR));
}
