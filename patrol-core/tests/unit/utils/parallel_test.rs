use super::*;

#[test]
fn can_collect_in_source_order() {
    let source = (0..100).collect::<Vec<usize>>();

    let by_ref = parallel_collect(&source, |&value| value * 2);
    let by_value = parallel_into_collect(source.clone(), |value| value + 1);

    assert_eq!(by_ref, source.iter().map(|value| value * 2).collect::<Vec<_>>());
    assert_eq!(by_value, source.iter().map(|value| value + 1).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2);

    let result = pool.execute(|| rayon::current_num_threads());

    assert_eq!(result, 2);
}
