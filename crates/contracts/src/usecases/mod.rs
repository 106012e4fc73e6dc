pub mod common;

pub mod u501_export_csv;
