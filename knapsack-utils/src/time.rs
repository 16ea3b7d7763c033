use std::time::Instant;

/// Runs `f` and returns its output with the elapsed wall-clock time in milliseconds.
pub fn time_ms<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    (output, start.elapsed().as_secs_f64() * 1000.0)
}
