//! Integration-level tests for the `unitsafe` facade crate.

use unitsafe::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

// ─────────────────────────────────────────────────────────────────────────────
// Scalars and the absolute/relative lattice
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn position_difference_is_a_length() {
    let a = AbsScalar::new(5.0, position::METER);
    let b = AbsScalar::new(2.0, position::METER);
    let d: RelScalar<Length> = a - b;
    assert_eq!(d.value(), 3.0);
    assert_eq!(d.unit(), length::METER);
}

#[test]
fn position_minus_length_is_a_position() {
    let a = AbsScalar::new(5.0, position::METER);
    let p: AbsScalar<Position> = a - RelScalar::new(2.0, length::METER);
    assert_eq!(p.value(), 3.0);

    let q: AbsScalar<Position> = RelScalar::new(1.0, length::KILOMETER) + a;
    assert_eq!(q.unit(), position::METER);
    assert_eq!(q.value(), 1005.0);
}

#[test]
fn length_times_frequency_is_a_speed() {
    let product = RelScalar::new(10.0, length::METER) * RelScalar::new(2.0, frequency::HERTZ);
    assert_eq!(product.resolve_kind().unwrap().name, "Speed");

    let v: RelScalar<Speed> = product.as_kind().unwrap();
    assert_eq!(v.si(), 20.0);
    assert_eq!(v.unit(), speed::METER_PER_SECOND);
    assert_abs_diff_eq!(v.in_unit(speed::KILOMETER_PER_HOUR), 72.0, epsilon = 1e-9);
}

#[test]
fn length_over_duration_is_a_speed() {
    let d = RelScalar::new(1_000.0, length::KILOMETER);
    let t = RelScalar::new(100.0, duration::SECOND);
    let v = (d / t).as_kind::<Speed>().unwrap();
    assert_abs_diff_eq!(v.si(), 10_000.0, epsilon = 1e-9);
}

#[test]
fn area_from_lengths() {
    let side = RelScalar::new(100.0, length::METER);
    let a = (side * side).as_kind::<Area>().unwrap();
    assert_abs_diff_eq!(a.in_unit(area::HECTARE), 1.0, epsilon = 1e-12);
}

#[test]
fn mismatched_product_does_not_resolve() {
    let weird = RelScalar::new(1.0, mass::KILOGRAM) * RelScalar::new(1.0, duration::SECOND);
    assert!(matches!(weird.resolve_kind(), Err(ValueError::UnresolvableUnit { .. })));
    assert!(matches!(weird.as_kind::<Speed>(), Err(ValueError::IncompatibleUnits { .. })));
}

#[test]
fn temperature_scales() {
    let freezing = AbsScalar::new(0.0, absolute_temperature::DEGREE_CELSIUS);
    assert_abs_diff_eq!(freezing.si(), 273.15, epsilon = 1e-9);
    assert_abs_diff_eq!(freezing.in_unit(absolute_temperature::DEGREE_FAHRENHEIT), 32.0, epsilon = 1e-9);

    let warm = AbsScalar::new(20.0, absolute_temperature::DEGREE_CELSIUS);
    let rise = warm - freezing;
    assert_eq!(rise.unit(), temperature::DEGREE_CELSIUS);
    assert_abs_diff_eq!(rise.value(), 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rise.in_unit(temperature::DEGREE_FAHRENHEIT), 36.0, epsilon = 1e-9);
}

#[test]
fn unit_round_trip_for_every_builtin_unit() {
    fn check<K: Kind>() {
        for unit in K::UNITS {
            for x in [0.0, 1.0, -1.0, 42.5, -273.0, 1234.5] {
                let back = unit.from_standard(unit.to_standard(x));
                assert_relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
    check::<Length>();
    check::<Position>();
    check::<Duration>();
    check::<Time>();
    check::<Temperature>();
    check::<AbsoluteTemperature>();
    check::<Angle>();
    check::<Direction>();
    check::<Mass>();
    check::<Speed>();
    check::<Frequency>();
    check::<Area>();
    check::<Force>();
    check::<Energy>();
    check::<Dimensionless>();
}

#[test]
fn scalar_ordering_and_sum() {
    let lengths = [
        RelScalar::new(1.0, length::KILOMETER),
        RelScalar::new(500.0, length::METER),
        RelScalar::new(1.0, length::MILE),
    ];
    let total: RelScalar<Length> = lengths.iter().copied().sum();
    assert_abs_diff_eq!(total.si(), 3109.344, epsilon = 1e-9);
    assert!(lengths[0] > lengths[1]);
    assert_eq!(lengths[0].max(lengths[2]), lengths[2]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sparse_vector_keeps_only_non_zero_cells() {
    let v = LengthVector::instantiate(&[0.0, 0.0, 3.0, 0.0], length::METER, StorageType::Sparse);
    match v.data() {
        VectorData::Sparse(s) => {
            assert_eq!(s.indices(), &[2]);
            assert_eq!(s.values(), &[3.0]);
        }
        VectorData::Dense(_) => panic!("expected sparse storage"),
    }
    assert_eq!(v.cardinality(), 1);
    assert_eq!(v.size(), 4);
    assert_eq!(v.values(), vec![0.0, 0.0, 3.0, 0.0]);
}

#[test]
fn storage_round_trip_preserves_values() {
    let values = [1.5, 0.0, -2.0, 0.0, 0.0, 7.25];
    let dense = LengthVector::instantiate(&values, length::KILOMETER, StorageType::Dense);
    let sparse = dense.to_sparse();
    assert_eq!(sparse.storage_type(), StorageType::Sparse);
    assert_eq!(sparse.values(), dense.values());
    assert_eq!(sparse.to_dense().values_si(), dense.values_si());
    assert_eq!(sparse, dense);
    assert_eq!(sparse.cardinality(), 3);
    assert_eq!(sparse.sum().si(), dense.sum().si());
}

#[test]
fn plus_rejects_different_sizes() {
    let a = LengthVector::instantiate(&[1.0, 2.0, 3.0], length::METER, StorageType::Dense);
    let b = LengthVector::instantiate(&[1.0, 2.0], length::METER, StorageType::Dense);
    assert_eq!(
        a.plus(&b).unwrap_err(),
        ValueError::ShapeMismatch {
            left: Shape::Vector(3),
            right: Shape::Vector(2),
        }
    );
}

#[test]
fn plus_then_minus_restores_the_operand() {
    let a = LengthVector::instantiate(&[1.0, 0.0, 3.0, 0.0], length::METER, StorageType::Sparse);
    let b = LengthVector::instantiate(&[0.5, 0.0, -1.0, 4.0], length::METER, StorageType::Dense);
    let back = a.plus(&b).unwrap().minus(&b).unwrap();
    assert_eq!(back.values_si(), a.values_si());
}

#[test]
fn additive_storage_rule() {
    let s = LengthVector::instantiate(&[1.0, 0.0], length::METER, StorageType::Sparse);
    let d = LengthVector::instantiate(&[1.0, 0.0], length::METER, StorageType::Dense);
    assert_eq!(s.plus(&s).unwrap().storage_type(), StorageType::Sparse);
    assert_eq!(s.plus(&d).unwrap().storage_type(), StorageType::Dense);
    assert_eq!(d.times(&d).unwrap().storage_type(), StorageType::Dense);
    assert_eq!(s.times(&d).unwrap().storage_type(), StorageType::Sparse);
}

#[test]
fn mutable_view_does_not_leak_writes() {
    let original = LengthVector::instantiate(&[1.0, 2.0, 3.0], length::METER, StorageType::Dense);
    assert_eq!(original.mutability(), Mutability::Immutable);

    let mut draft = original.mutable();
    assert_eq!(draft.mutability(), Mutability::MutableShared);
    draft.set_value(1, 20.0).unwrap();
    assert_eq!(draft.mutability(), Mutability::MutableExclusive);

    assert_eq!(original.values(), vec![1.0, 2.0, 3.0]);
    assert_eq!(draft.values(), vec![1.0, 20.0, 3.0]);

    let mut frozen = draft.immutable();
    assert!(matches!(
        frozen.set_value(0, 0.0),
        Err(ValueError::ImmutableMutation { what: "vector" })
    ));
}

#[test]
fn position_vectors_follow_the_lattice() {
    let a = PositionVector::instantiate(&[10.0, 20.0], position::METER, StorageType::Dense);
    let b = PositionVector::instantiate(&[4.0, 5.0], position::METER, StorageType::Dense);
    let d: LengthVector = a.minus(&b).unwrap();
    assert_eq!(d.values(), vec![6.0, 15.0]);

    let shifted: PositionVector = b.plus(&d).unwrap();
    assert_eq!(shifted, a);
    assert_eq!(d.plus_absolute(&b).unwrap(), a);
}

#[test]
fn vector_times_frequency_is_a_speed_vector() {
    let d = LengthVector::instantiate(&[10.0, 0.0, 4.0], length::METER, StorageType::Sparse);
    let f = FrequencyVector::instantiate(&[2.0, 2.0, 0.5], frequency::HERTZ, StorageType::Sparse);
    let v: SpeedVector = d.times(&f).unwrap().as_kind().unwrap();
    assert_eq!(v.values_si(), vec![20.0, 0.0, 2.0]);
    assert_eq!(v.unit(), speed::METER_PER_SECOND);
}

// ─────────────────────────────────────────────────────────────────────────────
// Matrices
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn matrix_index_bounds() {
    let m = LengthMatrix::zeros(3, 4, length::METER, StorageType::Dense).unwrap();
    assert!(m.get(2, 3).is_ok());
    assert_eq!(
        m.get(3, 0).unwrap_err(),
        ValueError::IndexOutOfRange {
            index: Index::Cell(3, 0),
            shape: Shape::Matrix(3, 4),
        }
    );
    assert!(m.get(0, 4).is_err());
}

#[test]
fn matrix_storage_round_trip() {
    let rows = vec![vec![0.0, 1.0, 0.0], vec![2.0, 0.0, 0.0]];
    let m = LengthMatrix::create(&rows, length::METER, StorageType::Sparse).unwrap();
    assert_eq!(m.cardinality(), 2);
    assert_eq!(m.to_dense().values(), rows);
    assert_eq!(m.to_dense(), m);
    assert_eq!(m.column(0).unwrap().values(), vec![0.0, 2.0]);
}

#[test]
fn matrix_mutation_isolated_between_views() {
    let base = TemperatureMatrix::instantiate(
        &[1.0, 2.0, 3.0, 4.0],
        2,
        2,
        temperature::KELVIN,
        StorageType::Dense,
    )
    .unwrap();
    let mut work = base.mutable();
    work.multiply_by(10.0).unwrap();
    assert_eq!(work.values(), vec![vec![10.0, 20.0], vec![30.0, 40.0]]);
    assert_eq!(base.values(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(base.diagonal().unwrap().values(), vec![1.0, 4.0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn scalar_json_round_trip() {
    let d = RelScalar::new(2.5, length::KILOMETER);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"value":2.5,"unit":"km"}"#);
    let back: RelScalar<Length> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    assert_eq!(back.unit(), length::KILOMETER);
}
