pub mod manifest;
pub mod permutations;
pub mod writer;
