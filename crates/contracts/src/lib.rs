//! Wire types shared by the catalog backend and its clients.

pub mod domain;
pub mod shared;
pub mod usecases;
