// Not every bench binary uses every helper
#![allow(dead_code)]

pub mod bezier;
pub mod samples;
