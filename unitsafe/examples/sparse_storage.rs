//! Dense and sparse storage side by side, plus copy-on-write views.
//!
//! Run with: cargo run --example sparse_storage

use unitsafe::{
    frequency, length, FrequencyVector, LengthMatrix, LengthVector, Mutability, SpeedVector, StorageType,
};

fn main() {
    // A mostly-empty vector stores only its non-zero cells.
    let readings = LengthVector::from_sparse(&[(3, 12.5), (97, 4.0)], 100, length::METER, StorageType::Sparse).unwrap();
    println!("size {} with {} stored cells", readings.size(), readings.cardinality());
    println!("total {}", readings.sum());

    // Same values, other representation: equality and sums do not change.
    let dense = readings.to_dense();
    assert_eq!(dense, readings);
    println!("dense copy is {:?}", dense.storage_type());

    // Element-wise product resolves back into a typed kind.
    let rates = FrequencyVector::instantiate(&[2.0; 100], frequency::HERTZ, StorageType::Dense);
    let speeds: SpeedVector = readings.times(&rates).unwrap().as_kind().unwrap();
    println!("speed at 3: {}", speeds.get(3).unwrap());
    assert_eq!(speeds.storage_type(), StorageType::Sparse);

    // Writes on a mutable view never reach the original.
    let mut draft = readings.mutable();
    assert_eq!(draft.mutability(), Mutability::MutableShared);
    draft.set_value(0, 1.0).unwrap();
    assert_eq!(draft.mutability(), Mutability::MutableExclusive);
    assert_eq!(readings.get_value(0).unwrap(), 0.0);

    let grid = LengthMatrix::from_sparse(&[(0, 0, 1.0), (2, 2, 3.0)], 3, 3, length::KILOMETER, StorageType::Sparse)
        .unwrap();
    println!("{}", grid);
    println!("diagonal {}", grid.diagonal().unwrap());
}
