//! Unit tests for shellfacts-syntax.

mod query_tests;
