pub mod a001_department;
pub mod a002_class;
pub mod a003_family;
pub mod a004_article;
