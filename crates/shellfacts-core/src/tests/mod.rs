//! Unit tests for `shellfacts_core` types.
