pub mod check;
pub mod compile;
pub mod loader;
pub mod lookup;
pub mod stats;

#[cfg(test)]
mod compile_tests;
