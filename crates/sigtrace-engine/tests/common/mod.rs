#![allow(dead_code)]

pub mod engine_test;
pub mod sink;

pub use engine_test::*;
