//! Plain text patterns: `o` is alive, ` ` or `.` is dead.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use log::{debug, warn};

use crate::{
    cell::Cell,
    error::{Error, Result},
    grid::Grid,
};

/// Drop surrounding blank lines and the indentation shared by every
/// non-blank row.
fn dedent(s: &str) -> Result<Vec<&str>> {
    let get_indent = |s: &str| match s.trim_start().len() {
        0 => None,
        l => Some(s.len() - l),
    };
    let s = s.trim_end();
    let indent = s.lines().filter_map(get_indent).min().unwrap_or_default();
    let lines = s.lines().skip_while(|l| l.trim().is_empty());
    lines
        .map(|l| {
            if l.trim().is_empty() {
                return Ok("");
            }
            if !l.is_char_boundary(indent) {
                return Err(Error::ParsePattern(format!(
                    "indentation of {l:?} does not line up with the other rows"
                )));
            }
            Ok(l.split_at(indent).1.trim_end())
        })
        .collect()
}

impl Grid {
    /// A dead `width` x `height` grid with `pattern` stamped at `offset`.
    /// Pattern cells that land outside the grid are dropped.
    pub fn with_pattern(
        width: usize,
        height: usize,
        pattern: &str,
        (row, col): (isize, isize),
    ) -> Result<Self> {
        let stamp = Grid::from_str(pattern)?;
        let mut grid = Grid::new(width, height)?;
        let mut clipped = 0;
        for (y, x) in stamp.live_cells() {
            let (y, x) = (y + row, x + col);
            match grid.index_for(y, x) {
                Some(_) => grid.set(y, x, Cell::Alive),
                None => clipped += 1,
            }
        }
        if clipped > 0 {
            warn!("{clipped} pattern cells fall outside the {width}x{height} grid");
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = dedent(s)?;
        let height = rows.len();
        let width = rows.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(width, height)?;
        for (y, line) in rows.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' | '.' => (),
                    'o' | 'O' | '*' | '#' => grid.set(y as isize, x as isize, Cell::Alive),
                    _ => {
                        return Err(Error::ParsePattern(format!(
                            "unexpected character {c:?} at row {y}, column {x}"
                        )))
                    }
                }
            }
        }
        debug!(
            "parsed {width}x{height} pattern with {} live cells",
            grid.population()
        );
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows = self.cells().chunks(self.width()).map(|row| {
            row.iter()
                .map(|cell| if cell.is_alive() { 'o' } else { '.' })
                .collect::<String>()
        });
        f.write_str(&rows.join("\n"))
    }
}
