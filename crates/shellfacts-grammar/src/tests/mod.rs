//! Unit tests for the Bash grammar definition.

mod property_tests;
