mod common;
mod platform_wheel_tests;
mod wheel_tests;
