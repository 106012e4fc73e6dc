pub mod executor;

pub use executor::export_all;
