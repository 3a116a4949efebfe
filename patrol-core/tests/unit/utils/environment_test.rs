use super::*;
use std::sync::Mutex;

parameterized_test! {can_map_collect_with_any_parallelism, parallelism, {
    can_map_collect_with_any_parallelism_impl(parallelism);
}}

can_map_collect_with_any_parallelism! {
    case01_sequential: Parallelism::Sequential,
    case02_full: Parallelism::Full,
    case03_limited: Parallelism::Limited { max: 2 },
    case04_limited_zero: Parallelism::Limited { max: 0 },
}

fn can_map_collect_with_any_parallelism_impl(parallelism: Parallelism) {
    let result = parallelism.map_collect((0..50).collect::<Vec<usize>>(), |value| value * value);

    assert_eq!(result, (0..50).map(|value| value * value).collect::<Vec<_>>());
}

#[test]
fn can_create_repeatable_environment() {
    let first = Environment::new_with_seed(5);
    let second = Environment::new_with_seed(5);

    assert_eq!(first.random.get_rng().uniform_index(1000), second.random.get_rng().uniform_index(1000));
    assert_eq!(first.parallelism, Parallelism::Full);
}

#[test]
fn can_use_custom_logger() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = messages.clone();
    let environment = Environment::new(
        Arc::new(DefaultRandom::new_with_seed(0)),
        Parallelism::Sequential,
        Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())),
    );

    (environment.logger)("hello");
    (silent_logger())("ignored");

    assert_eq!(messages.lock().unwrap().as_slice(), &["hello".to_string()]);
}

#[test]
fn can_get_cpus() {
    assert!(get_cpus() > 0);
}
