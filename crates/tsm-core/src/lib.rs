//! Shared types for the fixed-origin open-path routing problem.
//!
//! A [`DistanceMatrix`] holds directed weights between N cities. A tour visits every city
//! once starting from city 0, and its cost is the sum of the N-1 traversed edges
//! ([`path_cost`]); the return edge to the origin is not counted.

pub mod error;
pub mod generate;
pub mod matrix;
pub mod parse;
pub mod tour;

pub use error::{Error, Result};
pub use generate::{random_matrix, GenerateOptions};
pub use matrix::{DistanceMatrix, MatrixRows, Weight};
pub use parse::{format_matrix, parse_matrix, read_matrix, write_matrix};
pub use tour::{
    identity_path, initial_cost, is_valid_tour, path_cost, BestTour, Cost, Solution,
    INFINITE_COST,
};
