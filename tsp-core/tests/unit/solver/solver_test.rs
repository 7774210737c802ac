use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::FlagQuota;
use crate::models::check_tour;
use std::sync::Mutex;

fn create_solver(graph: Graph, max_workers: usize, max_attempts: Option<usize>, seed: Option<u64>) -> Solver {
    Builder::new(Arc::new(graph))
        .with_max_time(Some(10.))
        .with_max_workers(Some(max_workers))
        .with_max_attempts(max_attempts)
        .with_seed(seed)
        .build()
        .expect("cannot build solver")
}

#[test]
fn can_return_empty_solution_for_empty_graph() {
    let solution = solve(Arc::new(Graph::default()), 4, 1.).expect("cannot solve");

    assert_eq!(solution, Solution::default());
    assert!(solution.is_empty());
}

#[test]
fn can_return_single_node_solution() {
    let mut graph = Graph::default();
    graph.add_edge(42, 42, 1.);

    let solution = solve(Arc::new(graph), 4, 1.).expect("cannot solve");

    assert_eq!(solution.tour, vec![42]);
    assert_eq!(solution.cost, 0.);
    assert_eq!(solution.attempts, 1);
}

parameterized_test! {can_handle_zero_workers, (graph, expected_tour, expected_attempts), {
    can_handle_zero_workers_impl(graph, expected_tour, expected_attempts);
}}

can_handle_zero_workers! {
    case01_empty_graph: (Graph::default(), vec![], 0),
    case02_single_node: ({ let mut graph = Graph::default(); graph.add_node(7); graph }, vec![7], 1),
    case03_square: (create_square_graph(), vec![], 0),
}

fn can_handle_zero_workers_impl(graph: Graph, expected_tour: Vec<NodeId>, expected_attempts: usize) {
    let solution = solve(Arc::new(graph), 0, 1.).expect("cannot solve");

    assert_eq!(solution.tour, expected_tour);
    assert_eq!(solution.cost, 0.);
    assert_eq!(solution.attempts, expected_attempts);
}

#[test]
fn can_solve_square() {
    let graph = create_square_graph();

    let solution = create_solver(graph.clone(), 2, Some(20), None).solve().expect("cannot solve");

    assert_permutation(&graph, solution.tour.as_slice());
    assert_float_eq!(solution.cost, 4.);
    assert!(solution.attempts >= 20);
    assert_eq!(solution.metrics.attempts, solution.attempts);
}

#[test]
fn can_solve_two_nodes() {
    let mut graph = Graph::default();
    graph.add_edge(1, 2, 2.5);

    let solution = create_solver(graph, 1, Some(1), Some(0)).solve().expect("cannot solve");

    assert_eq!(solution.tour.len(), 2);
    assert_eq!(solution.cost, 5.);
}

parameterized_test! {can_return_empty_tour_without_hamiltonian_cycle, graph, {
    can_return_empty_tour_without_hamiltonian_cycle_impl(graph);
}}

can_return_empty_tour_without_hamiltonian_cycle! {
    case01_disconnected: create_disjoint_triangles_graph(),
    case02_path: create_path_graph(5),
}

fn can_return_empty_tour_without_hamiltonian_cycle_impl(graph: Graph) {
    let solution = Builder::new(Arc::new(graph))
        .with_max_time(Some(0.05))
        .with_max_workers(Some(2))
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve");

    assert!(solution.is_empty());
    assert_eq!(solution.cost, 0.);
    assert_eq!(solution.attempts, 0);
    assert!(solution.metrics.failures > 0);
}

#[test]
fn can_find_good_tour_for_us_cities() {
    let graph = create_us_cities_graph();

    let solution = create_solver(graph.clone(), 4, Some(200), None).solve().expect("cannot solve");

    assert_permutation(&graph, solution.tour.as_slice());
    assert_eq!(check_tour(&graph, solution.tour.as_slice()).map(|cost| (cost - solution.cost).abs() < 1E-6), Ok(true));
    assert!(solution.cost < 8131.);
}

#[test]
fn can_replay_search_with_one_worker_and_seed() {
    let graph = create_us_cities_graph();

    let first = create_solver(graph.clone(), 1, Some(10), Some(7)).solve().expect("cannot solve");
    let second = create_solver(graph, 1, Some(10), Some(7)).solve().expect("cannot solve");

    assert_eq!(first.tour, second.tour);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.attempts, 10);
}

#[test]
fn can_stop_on_external_quota() {
    let quota: Arc<dyn Quota + Send + Sync> = Arc::new(FlagQuota::new(true));

    let solution = Builder::new(Arc::new(create_us_cities_graph()))
        .with_max_time(Some(10.))
        .with_quota(Some(quota))
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve");

    assert!(solution.is_empty());
    assert_eq!(solution.attempts, 0);
}

#[test]
fn can_respect_time_limit() {
    let timer = Timer::start();

    let solution = solve(Arc::new(create_us_cities_graph()), 2, 0.2).expect("cannot solve");

    assert!(!solution.is_empty());
    assert!(timer.elapsed_secs_as_f64() < 2.);
}

#[test]
fn can_log_search_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    let solution = Builder::new(Arc::new(create_square_graph()))
        .with_max_workers(Some(1))
        .with_max_attempts(Some(3))
        .with_telemetry(TelemetryMode::OnlyLogging { logger })
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve");

    let messages = messages.lock().unwrap();
    assert!(messages.first().is_some_and(|msg| msg.starts_with("search on 4 nodes / 6 edges using 1 workers")));
    assert!(messages.iter().any(|msg| msg.contains("worker 0 found new best cost")));
    assert!(messages.last().is_some_and(|msg| msg.contains(&format!("best cost {:.4}", solution.cost))));
}
