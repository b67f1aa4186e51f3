use std::mem;

use log::trace;

use crate::{error::Result, grid::Grid, rule::Rule, stepper::advance};

/// Double buffer owned by the driver. Each tick writes into the spare grid
/// and then swaps roles, so no grid is reallocated between generations.
#[derive(Clone, Debug)]
pub struct Generations {
    present: Grid,
    future: Grid,
    generation: u64,
}

impl Generations {
    pub fn new(present: Grid) -> Self {
        let mut future = present.clone();
        future.clear();
        Self {
            present,
            future,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.present
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.present
    }

    pub fn into_current(self) -> Grid {
        self.present
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn swap(&mut self) {
        mem::swap(&mut self.present, &mut self.future);
    }

    pub fn tick(&mut self, rule: &impl Rule) -> Result<()> {
        advance(&self.present, &mut self.future, rule)?;
        self.swap();
        self.generation += 1;
        trace!(
            "generation {}: population {}",
            self.generation,
            self.present.population()
        );
        Ok(())
    }

    pub fn run(&mut self, rule: &impl Rule, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.tick(rule)?;
        }
        Ok(())
    }
}

impl From<Grid> for Generations {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, rule::conway};
    use std::str::FromStr;

    #[test]
    fn test_blinker() {
        // Blinker blinks with period 2.
        let horizontal = Grid::from_str(
            "
            .....
            .....
            .ooo.
            .....
            .....",
        )
        .unwrap();
        let vertical = Grid::from_str(
            "
            .....
            ..o..
            ..o..
            ..o..
            .....",
        )
        .unwrap();
        let mut gens = Generations::new(horizontal.clone());
        gens.tick(&conway).unwrap();
        assert_eq!(gens.current(), &vertical);
        gens.tick(&conway).unwrap();
        assert_eq!(gens.current(), &horizontal);
        assert_eq!(gens.generation(), 2);
    }

    #[test]
    fn test_swap_exchanges_buffers() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true);
        let mut gens = Generations::from(grid.clone());
        gens.swap();
        assert_eq!(gens.current().population(), 0);
        gens.swap();
        assert_eq!(gens.current(), &grid);
    }

    #[test]
    fn test_tick_rejects_mismatched_buffers() {
        let mut gens = Generations::new(Grid::default());
        *gens.current_mut() = Grid::new(3, 3).unwrap();
        gens.current_mut().set(1, 1, true);
        let before = gens.current().clone();
        assert_eq!(
            gens.tick(&conway),
            Err(Error::DimensionMismatch {
                present: (3, 3),
                future: (32, 32)
            })
        );
        assert_eq!(gens.generation(), 0);
        assert_eq!(gens.current(), &before);
        assert!(gens.run(&conway, 3).is_err());
        assert_eq!(gens.generation(), 0);
    }

    #[test]
    fn test_run_counts_generations() {
        let mut gens = Generations::new(Grid::default());
        gens.current_mut().toggle(3, 3);
        gens.run(&conway, 5).unwrap();
        assert_eq!(gens.generation(), 5);
        assert_eq!(gens.into_current().population(), 0);
    }
}
