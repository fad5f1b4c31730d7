//! Unit test modules.

mod daily_load_test;
mod zones_test;
