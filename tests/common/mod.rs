//! Common test utilities for geoheat.
//!
//! This module provides shared fixtures and image helpers for the
//! integration tests.
#![allow(dead_code)]

pub mod fixtures;
pub mod image_utils;
