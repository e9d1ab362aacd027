mod clean_tests;
mod common;
