//! `SeaORM` entity definitions.

pub mod albums;
pub mod photos;
