/// Returns amount of logical CPUs available to the process.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns an effective amount of workers: requested amount limited by available CPUs.
/// Returns zero only when zero workers are requested.
pub fn get_workers(requested: Option<usize>) -> usize {
    let cpus = get_cpus().max(1);

    requested.map_or(cpus, |requested| requested.min(cpus))
}
