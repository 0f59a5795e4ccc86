use block_matmul::{
    Matrix, MatmulError, multiply, multiply_naive, multiply_split, multiply_with_workers,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_pair(size: usize, seed: u64) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Matrix::random(size, -50..=50, &mut rng).unwrap();
    let b = Matrix::random(size, -50..=50, &mut rng).unwrap();
    (a, b)
}

fn divisors(n: usize) -> Vec<usize> {
    (1..=n).filter(|s| n % s == 0).collect()
}

// ============================================================
// Fixed example
// ============================================================

#[test]
fn test_3x3_one_cell_per_block() {
    let a = Matrix::from_rows(vec![vec![1, 2, -1], vec![0, 2, 1], vec![1, 1, 1]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0, 2, 1], vec![1, 1, 1], vec![1, 2, -1]]).unwrap();

    let c = multiply(&a, &b, 1).unwrap();

    // C[0][1] = 1*2 + 2*1 + (-1)*2 = 2
    assert_eq!(
        c.to_rows(),
        vec![vec![1, 2, 4], vec![3, 4, 1], vec![2, 5, 1]]
    );
    assert_eq!(c, multiply_naive(&a, &b).unwrap());
    assert_eq!(c.to_string(), "[[1 2 4] [3 4 1] [2 5 1]]");
}

// ============================================================
// Agreement with the naive reference
// ============================================================

#[test]
fn test_matches_naive_for_small_sizes() {
    for (seed, size) in [1usize, 2, 3, 4, 6, 9].into_iter().enumerate() {
        let (a, b) = random_pair(size, seed as u64);
        let expected = multiply_naive(&a, &b).unwrap();

        for bs in divisors(size) {
            let c = multiply(&a, &b, bs).unwrap();
            assert_eq!(c, expected, "size {} block {}", size, bs);
        }
    }
}

#[test]
fn test_block_size_does_not_change_result() {
    let size = 12;
    let (a, b) = random_pair(size, 99);
    let reference = multiply(&a, &b, size).unwrap();

    for bs in divisors(size) {
        assert_eq!(multiply(&a, &b, bs).unwrap(), reference, "block {}", bs);
    }
}

#[test]
fn test_identity_leaves_matrix_unchanged() {
    for size in [1, 4, 6, 9] {
        let (a, _) = random_pair(size, 7 + size as u64);
        let id = Matrix::identity(size).unwrap();

        for bs in divisors(size) {
            assert_eq!(multiply(&a, &id, bs).unwrap(), a, "A·I, size {} block {}", size, bs);
            assert_eq!(multiply(&id, &a, bs).unwrap(), a, "I·A, size {} block {}", size, bs);
        }
    }
}

#[test]
fn test_split_count_matches_block_size() {
    let size = 30;
    let (a, b) = random_pair(size, 3);

    for splits in [1, 2, 3, 5, 6, 10, 15, 30] {
        assert_eq!(
            multiply_split(&a, &b, splits).unwrap(),
            multiply(&a, &b, size / splits).unwrap(),
            "splits {}",
            splits
        );
    }
}

#[test]
fn test_bounded_workers_match_default() {
    let (a, b) = random_pair(24, 11);
    let expected = multiply_naive(&a, &b).unwrap();

    for workers in [0, 1, 2, 5, 100] {
        assert_eq!(
            multiply_with_workers(&a, &b, 4, workers).unwrap(),
            expected,
            "workers {}",
            workers
        );
    }
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_dimension_mismatch() {
    let a = Matrix::identity(3).unwrap();
    let b = Matrix::identity(2).unwrap();

    assert_eq!(
        multiply(&a, &b, 1).unwrap_err(),
        MatmulError::DimensionMismatch {
            expected: 3,
            got: 2
        }
    );
    assert!(matches!(
        multiply_split(&a, &b, 1),
        Err(MatmulError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_dimension_mismatch_reported_before_block_size() {
    let a = Matrix::identity(4).unwrap();
    let b = Matrix::identity(2).unwrap();

    // S=3 divides neither, but the operands are checked first.
    assert!(matches!(
        multiply(&a, &b, 3),
        Err(MatmulError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_non_square_input_rejected() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
    assert!(matches!(err, MatmulError::DimensionMismatch { .. }));
}

#[test]
fn test_invalid_block_size() {
    let a = Matrix::identity(4).unwrap();

    assert_eq!(
        multiply(&a, &a, 3).unwrap_err(),
        MatmulError::InvalidDimension { dim: 4, divisor: 3 }
    );
    assert_eq!(
        multiply(&a, &a, 0).unwrap_err(),
        MatmulError::InvalidDimension { dim: 4, divisor: 0 }
    );
    assert!(matches!(
        multiply(&a, &a, 8),
        Err(MatmulError::InvalidDimension { .. })
    ));
    assert!(matches!(
        multiply_split(&a, &a, 3),
        Err(MatmulError::InvalidDimension { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = MatmulError::InvalidDimension { dim: 4, divisor: 3 };
    assert_eq!(err.to_string(), "invalid dimension: 3 does not evenly divide 4");

    let err = MatmulError::DimensionMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");

    let err = Matrix::from_rows(Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid dimension: matrix must have at least one row"
    );
}

// ============================================================
// Concurrency stress
// ============================================================

#[test]
fn test_one_cell_per_block_is_deterministic() {
    let (a, b) = random_pair(100, 2024);
    let expected = multiply_naive(&a, &b).unwrap();

    // Eight workers pulling 10 000 single-cell blocks, joined every run.
    for run in 0..1000 {
        let c = multiply_with_workers(&a, &b, 1, 8).unwrap();
        assert!(c == expected, "run {} differs from the reference", run);
    }
}
