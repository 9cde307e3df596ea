pub mod bcd;
pub mod error;
pub mod geo;
pub mod io;
pub mod qint;
pub mod table;
pub mod tracing;

#[cfg(test)]
mod tests;
