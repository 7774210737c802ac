use super::*;
use std::sync::Arc;

#[test]
fn can_accept_only_strictly_better_tours() {
    let state = SearchState::new();

    assert_eq!(state.accept(&Tour::new(vec![0, 1, 2], 10.)), Some(1));
    assert_eq!(state.accept(&Tour::new(vec![1, 0, 2], 10.)), None);
    assert_eq!(state.accept(&Tour::new(vec![2, 1, 0], 12.)), None);
    assert_eq!(state.accept(&Tour::new(vec![0, 2, 1], 8.)), Some(4));

    assert_eq!(state.attempts(), 4);
    assert_eq!(state.into_best(), (Some(Tour::new(vec![0, 2, 1], 8.)), 4));
}

#[test]
fn can_return_no_tour_when_nothing_accepted() {
    let state = SearchState::new();

    assert_eq!(state.into_best(), (None, 0));
}

#[test]
fn can_keep_best_tour_under_concurrent_updates() {
    let state = Arc::new(SearchState::new());

    let handles: Vec<_> = (0..4)
        .map(|thread_idx| {
            let state = state.clone();
            std::thread::spawn(move || {
                (0..100).for_each(|idx| {
                    let cost = (1000 - idx * 4 - thread_idx) as Cost;
                    state.accept(&Tour::new(vec![thread_idx, idx], cost));
                });
            })
        })
        .collect();
    handles.into_iter().for_each(|handle| handle.join().expect("thread failed"));

    let state = Arc::into_inner(state).expect("state is still shared");
    assert_eq!(state.into_best(), (Some(Tour::new(vec![3, 99], 601.)), 400));
}

#[test]
fn can_read_attempts_while_best_tour_is_locked() {
    let state = SearchState::new();
    state.accept(&Tour::new(vec![0, 1, 2], 10.));
    state.accept(&Tour::new(vec![0, 2, 1], 11.));

    let _guard = state.lock();

    assert_eq!(state.attempts(), 2);
}
