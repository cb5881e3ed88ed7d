//! Property-based tests for the synthesis pipeline.
