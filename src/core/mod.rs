//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Item and report model
//! - Name collation
//! - Typed validation errors
//! - Rendering functions for different output formats
//! - Input reading
//! - Common utilities

pub mod collate;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod util;
