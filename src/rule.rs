use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::error::Error;

/// Decides whether a cell is alive in the next generation.
pub trait Rule {
    fn next_state(&self, is_alive: bool, living_neighbors: u8) -> bool;
}

impl<F: Fn(bool, u8) -> bool> Rule for F {
    fn next_state(&self, is_alive: bool, living_neighbors: u8) -> bool {
        self(is_alive, living_neighbors)
    }
}

/// Conway's Game of Life.
pub fn conway(is_alive: bool, living_neighbors: u8) -> bool {
    matches!((is_alive, living_neighbors), (true, 2 | 3) | (false, 3))
}

/// A life-like rule in `B/S` notation. Bit `n` of a mask is set when a count
/// of `n` neighbours qualifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survival: u16,
}

impl LifeRule {
    pub const CONWAY: LifeRule = LifeRule {
        birth: 0b0_0000_1000,
        survival: 0b0_0000_1100,
    };

    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            birth: mask(birth)?,
            survival: mask(survival)?,
        })
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl Rule for LifeRule {
    fn next_state(&self, is_alive: bool, living_neighbors: u8) -> bool {
        let mask = if is_alive { self.survival } else { self.birth };
        living_neighbors <= 8 && mask & (1 << living_neighbors) != 0
    }
}

fn mask(counts: &[u8]) -> Result<u16, Error> {
    counts.iter().try_fold(0, |mask, &n| match n {
        0..=8 => Ok(mask | 1 << n),
        _ => Err(Error::ParseRule(format!("neighbour count {n} is above 8"))),
    })
}

fn digits(part: &str, prefix: char) -> Result<Vec<u8>, Error> {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => (),
        _ => return Err(Error::ParseRule(format!("expected '{prefix}' in {part:?}"))),
    }
    chars
        .map(|c| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(Error::ParseRule(format!("unexpected character {c}"))),
        })
        .collect()
}

impl FromStr for LifeRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((birth, survival)) = s.trim().split_once('/') else {
            return Err(Error::ParseRule(format!("missing '/' in {s:?}")));
        };
        LifeRule::new(&digits(birth, 'B')?, &digits(survival, 'S')?)
    }
}

impl Display for LifeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (prefix, mask) in [('B', self.birth), ('S', self.survival)] {
            if prefix == 'S' {
                f.write_char('/')?;
            }
            f.write_char(prefix)?;
            for n in (0..=8u16).filter(|&n| mask & (1 << n) != 0) {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}
