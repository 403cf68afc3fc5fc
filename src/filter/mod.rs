//! Post-search solution filters

pub mod collinear;

pub use collinear::{
    are_collinear, find_collinear_triplet, has_collinear_triplet, strip_collinear_triplets,
};
