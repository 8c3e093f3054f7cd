//! Core business logic for Gallery.
//!
//! This crate contains the album domain with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `album` - Album use cases and the row/container consistency policy
//! - `storage` - Local and object store album containers

pub mod album;
pub mod storage;
