use rstest::rstest;
use stitchforge::distribution::distribute;

#[rstest]
#[case(8, 4, vec![2, 2, 2, 2])]
#[case(7, 3, vec![2, 2, 3])]
#[case(2, 4, vec![0, 1, 0, 1])]
#[case(10, 4, vec![2, 3, 2, 3])]
#[case(3, 1, vec![3])]
#[case(0, 3, vec![0, 0, 0])]
#[case(1, 5, vec![0, 0, 0, 0, 1])]
#[case(4, 5, vec![0, 1, 1, 1, 1])]
#[case(17, 5, vec![3, 3, 4, 3, 4])]
fn test_known_distributions(#[case] total: u32, #[case] groups: u32, #[case] expected: Vec<u32>) {
    let d = distribute(total, groups).unwrap();
    assert_eq!(
        d.segments(),
        expected.as_slice(),
        "distribute({}, {}) produced the wrong sequence",
        total,
        groups
    );
    assert_eq!(d.total(), total as u64);
}

#[test]
fn test_larger_segments_are_not_clustered() {
    // 5 extra units over 10 groups alternate instead of bunching at one end
    let d = distribute(25, 10).unwrap();
    assert_eq!(d.segments(), &[2, 3, 2, 3, 2, 3, 2, 3, 2, 3]);
}

#[test]
fn test_zero_groups_is_invalid_argument() {
    let err = distribute(10, 0).unwrap_err();
    assert!(err.to_string().contains("zero groups"), "got: {}", err);
}

#[test]
fn test_extreme_sizes_do_not_overflow() {
    let d = distribute(u32::MAX, 3).unwrap();
    assert_eq!(d.len(), 3);
    assert_eq!(d.total(), u32::MAX as u64);

    let d = distribute(u32::MAX - 1, 1).unwrap();
    assert_eq!(d[0], u32::MAX - 1);
}
