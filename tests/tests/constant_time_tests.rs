//! Timing checks for secret-dependent code paths
//!
//! These are noisy on shared machines and are ignored by default. Run them
//! with `cargo test -p wgkeygen-tests --release -- --ignored`.

use std::hint::black_box;
use wgkeygen_algorithms::{base_point_u, ladder, FieldElement};
use wgkeygen_tests::constant_time::{TestConfig, TimingAnalysis, TimingTester};

fn report(name: &str, analysis: &TimingAnalysis) {
    println!("{} timing analysis:", name);
    println!(
        "  Mean times: {:.2} ns vs {:.2} ns",
        analysis.mean_a, analysis.mean_b
    );
    println!("  Mean ratio: {:.3}", analysis.mean_ratio);
    println!(
        "  t-statistic: {:.3} (df {:.1}, p {:.4})",
        analysis.t_statistic, analysis.degrees_of_freedom, analysis.p_value
    );
}

#[test]
#[ignore]
fn test_ladder_constant_time() {
    let config = TestConfig::for_ladder();
    // Sparse and dense scalars with the same clamped shape
    let mut sparse = [0u8; 32];
    sparse[31] = 0x40;
    let mut dense = [0xffu8; 32];
    dense[0] = 0xf8;
    dense[31] = 0x7f;
    let u = base_point_u();

    for _ in 0..config.num_warmup {
        black_box(ladder(black_box(&sparse), &u));
        black_box(ladder(black_box(&dense), &u));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(ladder(black_box(&sparse), &u));
        },
        || {
            black_box(ladder(black_box(&dense), &u));
        },
    );

    let analysis = tester
        .analyze(&t1, &t2, config.mean_ratio_max, config.t_stat_threshold)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Montgomery ladder", &analysis);

    assert!(
        analysis.is_constant_time,
        "ladder timing depends on the scalar: ratio={:.3}, t={:.3}",
        analysis.mean_ratio, analysis.t_statistic
    );
}

#[test]
#[ignore]
fn test_field_pow_constant_time() {
    let config = TestConfig::for_field_op().with_samples_and_iterations(40, 200);
    let base = FieldElement::from(9u64);
    let zeros = [0u8; 32];
    let ones = [0xffu8; 32];

    for _ in 0..config.num_warmup / 100 {
        black_box(base.pow(black_box(&zeros)));
        black_box(base.pow(black_box(&ones)));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(base.pow(black_box(&zeros)));
        },
        || {
            black_box(base.pow(black_box(&ones)));
        },
    );

    let analysis = tester
        .analyze(&t1, &t2, config.mean_ratio_max, config.t_stat_threshold)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Field pow", &analysis);

    assert!(
        analysis.is_constant_time,
        "pow timing depends on the exponent: ratio={:.3}, t={:.3}",
        analysis.mean_ratio, analysis.t_statistic
    );
}

#[test]
#[ignore]
fn test_field_mul_constant_time() {
    let config = TestConfig::for_field_op();
    let small = FieldElement::from(3u64);
    let large = FieldElement::from_bytes(&[0xee; 32]);

    for _ in 0..config.num_warmup {
        black_box(black_box(small).mul(&small));
        black_box(black_box(large).mul(&large));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(black_box(small).mul(&small));
        },
        || {
            black_box(black_box(large).mul(&large));
        },
    );

    let analysis = tester
        .analyze(&t1, &t2, config.mean_ratio_max, config.t_stat_threshold)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Field mul", &analysis);

    assert!(analysis.is_constant_time);
}
