//! Services that run outside the editing core: file I/O workers,
//! the channel back to the main loop, and logging.

pub mod async_bridge;
pub mod fs;
pub mod tracing_setup;
