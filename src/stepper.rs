use crate::{
    cell::Cell,
    error::{Error, Result},
    grid::Grid,
    rule::Rule,
};

/// Compute the generation after `present` into `future`.
///
/// Neighbour counts are always taken from `present`, and `future` only
/// receives the new buffer once every cell has been computed. On a dimension
/// mismatch neither grid is touched.
pub fn advance(present: &Grid, future: &mut Grid, rule: &impl Rule) -> Result<()> {
    if present.dimensions() != future.dimensions() {
        return Err(Error::DimensionMismatch {
            present: present.dimensions(),
            future: future.dimensions(),
        });
    }
    let next = (0..present.len())
        .filter_map(|i| present.coords_for(i))
        .map(|(row, col)| {
            let is_alive = present.get(row, col).is_alive();
            let n = present.living_neighbors(row, col);
            Cell::from(rule.next_state(is_alive, n))
        })
        .collect();
    future.replace_cells(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{conway, LifeRule};
    use std::collections::HashSet;

    fn grid_with(width: usize, height: usize, live: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    fn live_set(grid: &Grid) -> HashSet<(isize, isize)> {
        grid.live_cells().collect()
    }

    #[test]
    fn test_glider() {
        let present = grid_with(5, 5, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let mut future = Grid::new(5, 5).unwrap();
        advance(&present, &mut future, &conway).unwrap();
        let expected = HashSet::from([(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]);
        assert_eq!(live_set(&future), expected);
    }

    #[test]
    fn test_block() {
        // Block is constant.
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let present = grid_with(4, 4, &block);
        let mut future = Grid::new(4, 4).unwrap();
        advance(&present, &mut future, &LifeRule::CONWAY).unwrap();
        assert_eq!(live_set(&future), live_set(&present));
    }

    #[test]
    fn test_present_untouched() {
        let present = grid_with(6, 6, &[(2, 1), (2, 2), (2, 3)]);
        let before = present.clone();
        let mut future = grid_with(6, 6, &[(0, 0), (5, 5)]);
        advance(&present, &mut future, &conway).unwrap();
        assert_eq!(present, before);
        // Stale future contents do not leak into the result.
        assert_eq!(live_set(&future), HashSet::from([(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let present = grid_with(4, 4, &[(1, 1)]);
        let mut future = grid_with(4, 5, &[(0, 0)]);
        let (p, f) = (present.clone(), future.clone());
        assert_eq!(
            advance(&present, &mut future, &conway),
            Err(Error::DimensionMismatch {
                present: (4, 4),
                future: (4, 5)
            })
        );
        assert_eq!(present, p);
        assert_eq!(future, f);
    }

    #[test]
    fn test_edges_are_dead() {
        // A blinker against the edge loses the cells that would fall off.
        let present = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        let mut future = Grid::new(3, 3).unwrap();
        advance(&present, &mut future, &conway).unwrap();
        assert_eq!(live_set(&future), HashSet::from([(0, 1), (1, 1)]));
    }
}
