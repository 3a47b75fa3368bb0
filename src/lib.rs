//! Generation and cross-checking of integer polynomial multiplication
//! tasks.
//!
//! The crate pairs a task generator, which persists batches of random
//! polynomial pairs together with their trusted product, with a verifier
//! that recomputes every product using a selectable multiplication routine
//! (FFT convolution, schoolbook, or the trusted library) and fails loudly
//! on the first differing coefficient.

pub mod errors;
pub mod fft;
pub mod parameters;
pub mod poly;
pub mod task;
