//! Test suite for Cinerate
//!
//! This module organizes all tests

pub mod common;
