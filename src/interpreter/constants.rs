// Constants for the block interpreter

/// Maximum number of loop body executions for one `while` or `for` fragment.
/// The 1001st attempt fails with `IterationLimitExceeded`, leaving the store
/// in the state produced by the 1000 completed iterations.
pub const MAX_LOOP_ITERATIONS: usize = 1000;
