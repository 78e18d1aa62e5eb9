//! Unit and behaviour tests for the `shellfacts` facade.
