pub mod aggregate;

pub use aggregate::Department;
