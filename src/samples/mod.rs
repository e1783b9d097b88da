// file: src/samples/mod.rs
// description: synthetic transaction sample module exports
// reference: internal module structure

pub mod category;
pub mod csv_io;
pub mod generator;

pub use category::{Account, CATEGORIES, SampleCategory};
pub use csv_io::{HEADER, read, write};
pub use generator::{DEFAULT_DAYS, DEFAULT_ROWS, SampleDataGenerator, TransactionRecord};
