//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Maybe, Pool, Error, and persistent collections.

mod collections;
mod values;
