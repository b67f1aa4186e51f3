mod cell;
mod error;
mod generations;
mod grid;
mod pattern;
mod rule;
mod stepper;

pub use crate::{
    cell::Cell,
    error::{Error, Result},
    generations::Generations,
    grid::Grid,
    rule::{conway, LifeRule, Rule},
    stepper::advance,
};
