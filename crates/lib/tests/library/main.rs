mod build_tests;
mod common;
mod failure_tests;
