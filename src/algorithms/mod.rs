//! FFT Algorithm Implementations
//!
//! This module contains the core FFT algorithm implementations.
//!
//! ## Available Algorithms
//!
//! - **DIT (Decimation-in-Time)**: Iterative radix-2 Cooley-Tukey. Input is bit-reversed
//!   in place first, output is in natural order.
//!
//! - **Multithreaded DIT**: The same butterflies, with each stage's groups statically split
//!   across a fixed pool of worker threads that rendezvous at a barrier between stages.
//!
//! ## Algorithm Selection
//!
//! - Use the single-threaded DIT for small inputs, where thread startup and per-stage
//!   synchronization dominate.
//! - Use the multithreaded DIT for large inputs on multi-core hosts.

pub mod bit_reversal;
pub mod dit;
pub mod parallel;
