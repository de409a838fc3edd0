//! Integration tests for datagrid.

mod util;

mod column_set_tests;
mod valid_config_tests;
