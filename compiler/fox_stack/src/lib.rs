//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of parentheses, and the
//! interpreter recurses once per nested expression and per user function
//! call. A recursive Fox function such as a naive `fib` can go deep enough
//! to overflow the default thread stack, so both wrap their recursive entry
//! points in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new stack segment
//!   when the remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
