//! Shared thread pool for parallel Monte-Carlo simulation.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Get or initialize the shared thread pool.
///
/// Falls back to rayon's global pool if a dedicated pool cannot be built.
#[cfg(feature = "parallel")]
fn get_thread_pool() -> Option<&'static ThreadPool> {
    if let Some(pool) = THREAD_POOL.get() {
        return Some(pool);
    }
    match rayon::ThreadPoolBuilder::new()
        .thread_name(|i| format!("rft-effect-{}", i))
        .build()
    {
        Ok(pool) => Some(THREAD_POOL.get_or_init(|| pool)),
        Err(err) => {
            tracing::warn!("failed to build simulation thread pool: {}", err);
            None
        }
    }
}

/// Execute a parallel operation on the shared pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
