#![deny(warnings)]

pub mod digest;


pub mod tree_record;

#[cfg(test)]
mod tree_record_tests;

pub mod tree;
