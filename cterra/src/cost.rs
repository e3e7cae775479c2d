use crate::{
    dims::Coord,
    error::{Error, Result},
    grid::Maze,
};

/// Sum of the weights of every cell on the path, endpoints included.
pub fn cost(maze: &Maze, path: &[Coord]) -> Result<u32> {
    path.iter().try_fold(0, |total, &pos| {
        let weight = maze.grid().weight(pos).ok_or(Error::OutOfBounds(pos))?;
        add_weight(total, weight)
    })
}

fn add_weight(total: u32, weight: u32) -> Result<u32> {
    total.checked_add(weight).ok_or(Error::CostOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn maze() -> Maze {
        let grid = Grid::parse(&["#######", "#.gmw.#", "#######"]).unwrap();
        Maze::new(grid, Coord(1, 1), Coord(1, 5)).unwrap()
    }

    #[test]
    fn sums_weights() {
        let maze = maze();
        let path = [Coord(1, 1), Coord(1, 2), Coord(1, 3), Coord(1, 4), Coord(1, 5)];
        assert_eq!(cost(&maze, &path), Ok(16));
        assert_eq!(cost(&maze, &path), cost(&maze, &path));
        assert_eq!(cost(&maze, &[]), Ok(0));
    }

    #[test]
    fn out_of_bounds() {
        let maze = maze();
        assert_eq!(
            cost(&maze, &[Coord(1, 1), Coord(-1, 1)]),
            Err(Error::OutOfBounds(Coord(-1, 1)))
        );
        assert_eq!(
            cost(&maze, &[Coord(3, 0)]),
            Err(Error::OutOfBounds(Coord(3, 0)))
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(add_weight(u32::MAX - 10, 10), Ok(u32::MAX));
        assert_eq!(add_weight(u32::MAX - 9, 10), Err(Error::CostOverflow));
        assert_eq!(add_weight(u32::MAX, 0), Ok(u32::MAX));
    }
}
