use linear_perceptron::{Perceptron, PerceptronConfig, PerceptronError};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const AND: [([f32; 2], u8); 4] = [([0.0, 0.0], 0), ([0.0, 1.0], 0), ([1.0, 0.0], 0), ([1.0, 1.0], 1)];
const OR: [([f32; 2], u8); 4] = [([0.0, 0.0], 0), ([0.0, 1.0], 1), ([1.0, 0.0], 1), ([1.0, 1.0], 1)];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn load(p: &mut Perceptron<f32>, examples: &[([f32; 2], u8)]) {
    for (features, label) in examples {
        p.add_example(features, *label).unwrap();
    }
}

#[test]
fn test_and_converges_within_twenty_epochs() {
    init_tracing();
    let mut p = Perceptron::from_weights(vec![0.123_f32, -0.457, 0.311], 0.1).unwrap();
    load(&mut p, &AND);

    let mut accuracy = 0.0;
    for _ in 0..20 {
        accuracy = p.train().unwrap();
        if accuracy == 1.0 {
            break;
        }
    }
    assert_eq!(accuracy, 1.0);
    assert_eq!(p.classify(&[1.0, 1.0]).unwrap(), 1);
    assert_eq!(p.classify(&[0.0, 0.0]).unwrap(), 0);
}

#[test]
fn test_or_converges_from_seeded_weights() {
    init_tracing();
    for seed in [1_u64, 2, 3, 42] {
        let config = PerceptronConfig::new(2, 0.1).with_seed(seed);
        let mut p = Perceptron::<f32>::from_config(&config).unwrap();
        load(&mut p, &OR);

        let report = p.train_until_converged(50).unwrap();
        assert!(report.converged, "seed {seed} did not converge: {report:?}");
        for (features, label) in OR {
            assert_eq!(p.classify(&features).unwrap(), label);
        }
    }
}

#[test]
fn test_clear_then_retrain_matches_fresh_instance() {
    let mut reused = Perceptron::with_rng(2, 0.1_f32, &mut StdRng::seed_from_u64(5)).unwrap();
    load(&mut reused, &OR);
    reused.train().unwrap();
    reused.train().unwrap();
    reused.clear_all_classes();

    // A fresh instance starting from the same weights must follow the same path.
    let mut fresh = Perceptron::from_weights(reused.weights().to_vec(), 0.1_f32).unwrap();

    load(&mut reused, &AND);
    load(&mut fresh, &AND);
    for _ in 0..5 {
        assert_eq!(reused.train().unwrap(), fresh.train().unwrap());
        assert_eq!(reused.weights(), fresh.weights());
    }
    assert_eq!(reused.example_count(), 4);
}

#[test]
fn test_clear_before_training_matches_same_seed() {
    let mut reused = Perceptron::with_rng(2, 0.1_f32, &mut StdRng::seed_from_u64(9)).unwrap();
    let mut fresh = Perceptron::with_rng(2, 0.1_f32, &mut StdRng::seed_from_u64(9)).unwrap();
    load(&mut reused, &OR);
    reused.clear_all_classes();

    load(&mut reused, &AND);
    load(&mut fresh, &AND);
    assert_eq!(reused.train().unwrap(), fresh.train().unwrap());
    assert_eq!(reused.weights(), fresh.weights());
}

#[test]
fn test_get_weights_matches_weights_used_for_classification() {
    let mut p = Perceptron::with_rng(3, 0.2_f32, &mut StdRng::seed_from_u64(17)).unwrap();
    p.add_example(&[1.0, -1.0, 0.5], 1).unwrap();
    p.add_example(&[-0.5, 2.0, 1.0], 0).unwrap();
    p.train().unwrap();

    let mut buffer = [0.0_f32; 4];
    p.get_weights(&mut buffer, 4).unwrap();
    assert_eq!(&buffer, p.weights());

    let input = [0.3_f32, 0.7, -0.2];
    let sum = input.iter().zip(buffer.iter()).map(|(x, w)| x * w).sum::<f32>() + buffer[3];
    assert_eq!(p.classify(&input).unwrap(), u8::from(sum > 0.0));
}

#[test]
fn test_add_example_wrong_length_leaves_store_untouched() {
    let mut p = Perceptron::<f32>::new(2, 0.1).unwrap();
    p.add_example(&[0.0, 1.0], 1).unwrap();
    let err = p.add_example(&[0.0, 1.0, 2.0], 1).unwrap_err();
    assert_eq!(err, PerceptronError::InvalidInputLength { expected: 2, actual: 3 });
    assert_eq!(p.example_count(), 1);
}

fn rows_strategy() -> impl Strategy<Value = Vec<(Vec<f64>, u8)>> {
    prop::collection::vec((prop::collection::vec(-10.0_f64..10.0, 3), 0_u8..=1), 1..12)
}

proptest! {
    #[test]
    fn prop_classify_is_pure(
        weights in prop::collection::vec(-1.0_f64..1.0, 4),
        input in prop::collection::vec(-100.0_f64..100.0, 3),
    ) {
        let p = Perceptron::from_weights(weights.clone(), 0.1).unwrap();
        let first = p.classify(&input).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(p.classify(&input).unwrap(), first);
        }
        prop_assert_eq!(p.weights(), weights.as_slice());
    }

    #[test]
    fn prop_epoch_matches_manual_online_updates(
        weights in prop::collection::vec(-1.0_f64..1.0, 4),
        rate in 0.01_f64..1.0,
        rows in rows_strategy(),
    ) {
        let mut p = Perceptron::from_weights(weights.clone(), rate).unwrap();
        for (features, label) in &rows {
            p.add_example(features, *label).unwrap();
        }
        let accuracy = p.train().unwrap();

        let mut expected = weights;
        let mut correct = 0.0;
        for (features, label) in &rows {
            let sum: f64 = features.iter().zip(&expected).map(|(x, w)| x * w).sum::<f64>() + expected[3];
            let guess = if sum > 0.0 { 1.0 } else { 0.0 };
            let error = f64::from(*label) - guess;
            if error == 0.0 {
                correct += 1.0;
                continue;
            }
            let step = rate * error;
            for (w, x) in expected.iter_mut().zip(features.iter().chain(std::iter::once(&1.0))) {
                *w += step * x;
            }
        }

        prop_assert_eq!(p.weights(), expected.as_slice());
        prop_assert_eq!(accuracy, correct / rows.len() as f64);
        prop_assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn prop_correctly_classified_set_is_a_fixed_point(
        weights in prop::collection::vec(-1.0_f64..1.0, 4),
        inputs in prop::collection::vec(prop::collection::vec(-10.0_f64..10.0, 3), 1..10),
    ) {
        let mut p = Perceptron::from_weights(weights.clone(), 0.3).unwrap();
        for input in &inputs {
            let label = p.classify(input).unwrap();
            p.add_example(input, label).unwrap();
        }
        prop_assert_eq!(p.train().unwrap(), 1.0);
        prop_assert_eq!(p.weights(), weights.as_slice());
    }
}
