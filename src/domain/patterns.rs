use super::{Cell, Grid};

/// A named arrangement of live cells, expressed as (dx, dy) offsets from an
/// anchor cell: dx runs along columns, dy along rows. Offsets are signed so
/// a pattern can extend in every direction from the clicked cell.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: &'static str, offsets: Vec<(i32, i32)>) -> Self {
        Self { name, offsets }
    }

    /// Stamp the pattern onto the grid anchored at (row, col). Offsets that
    /// land outside the grid are dropped; nothing wraps and nothing panics.
    pub fn stamp_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dx, dy) in &self.offsets {
            let r = usize::try_from(row as i32 + dy);
            let c = usize::try_from(col as i32 + dx);
            if let (Ok(r), Ok(c)) = (r, c) {
                grid.set(r, c, Cell::Alive);
            }
        }
    }
}

/// Seed pattern library: the table of well-known configurations a click
/// stamps onto the grid. Built once at startup.
pub mod presets {
    use super::Pattern;

    /// R-pentomino - smallest methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            vec![(0, 0), (-1, 0), (0, 1), (0, -1), (1, -1)],
        )
    }

    /// Diehard - vanishes without trace after 130 generations
    pub fn diehard() -> Pattern {
        Pattern::new(
            "Diehard",
            vec![(-3, 0), (-2, 0), (-2, 1), (2, 1), (3, 1), (4, 1), (3, -1)],
        )
    }

    /// Acorn - methuselah, stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            vec![(0, 0), (-3, 1), (-2, 1), (-2, -1), (1, 1), (2, 1), (3, 1)],
        )
    }

    /// Bunnies - methuselah, stabilizes after 17332 generations
    pub fn bunnies() -> Pattern {
        Pattern::new(
            "Bunnies",
            vec![
                (-4, -1), (-3, 2), (-2, 0), (-2, 1), (-1, 2),
                (1, 1), (2, 0), (2, -1), (3, 1),
            ],
        )
    }

    /// B-heptomino - frequent ingredient of larger constructions
    pub fn b_heptomino() -> Pattern {
        Pattern::new(
            "B-heptomino",
            vec![(0, 0), (-1, 0), (-1, -1), (0, 1), (1, 0), (1, -1), (2, -1)],
        )
    }

    /// Pi-heptomino - stabilizes after 173 generations
    pub fn pi_heptomino() -> Pattern {
        Pattern::new(
            "Pi-heptomino",
            vec![(-1, 0), (-1, -1), (-1, 1), (0, -1), (1, 0), (1, -1), (1, 1)],
        )
    }

    /// Gliders by the dozen - emits twelve gliders while evolving
    pub fn gliders_by_the_dozen() -> Pattern {
        Pattern::new(
            "Gliders by the dozen",
            vec![
                (-2, 0), (-2, -1), (-2, 1), (-1, -1),
                (1, 1), (2, 0), (2, -1), (2, 1),
            ],
        )
    }

    /// The full seed table
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            r_pentomino(),
            diehard(),
            acorn(),
            bunnies(),
            b_heptomino(),
            pi_heptomino(),
            gliders_by_the_dozen(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn test_seed_table_integrity() {
        let patterns = all_patterns();
        assert_eq!(patterns.len(), 7);
        assert!(patterns.iter().all(|p| !p.offsets.is_empty()));

        let mut names: Vec<_> = patterns.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), patterns.len());
    }

    #[test]
    fn test_stamp_sets_anchored_cells() {
        let mut grid = Grid::new(20, 20);
        r_pentomino().stamp_on(&mut grid, 10, 10);

        assert_eq!(grid.population(), 5);
        assert_eq!(grid.get(10, 10), Some(Cell::Alive));
        assert_eq!(grid.get(10, 9), Some(Cell::Alive)); // dx -1
        assert_eq!(grid.get(11, 10), Some(Cell::Alive)); // dy 1
        assert_eq!(grid.get(9, 10), Some(Cell::Alive)); // dy -1
        assert_eq!(grid.get(9, 11), Some(Cell::Alive)); // dx 1, dy -1
    }

    #[test]
    fn test_stamp_at_origin_drops_negative_offsets() {
        let mut grid = Grid::new(20, 20);
        r_pentomino().stamp_on(&mut grid, 0, 0);

        // Only the offsets with non-negative row and column survive
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(1, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_stamp_at_far_corner_does_not_wrap() {
        let mut grid = Grid::new(10, 10);
        for pattern in all_patterns() {
            pattern.stamp_on(&mut grid, 9, 9);
        }

        // Every written cell sits in the bottom-right quadrant around the
        // anchor; a wrapping write would light up the opposite edge.
        for (row, col, cell) in grid.iter_cells() {
            if cell.is_alive() {
                assert!(row >= 5 && col >= 5, "unexpected live cell at ({row}, {col})");
            }
        }
    }
}
