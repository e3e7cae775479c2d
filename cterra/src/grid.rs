use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Coord,
    error::{Error, Result},
};

/// Terrain of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Grass,
    Mud,
    Water,
    Footpath,
}

impl CellKind {
    /// Cost of entering the cell, `None` for walls which are never entered.
    pub fn cost(self) -> Option<u32> {
        match self {
            CellKind::Wall => None,
            CellKind::Grass => Some(1),
            CellKind::Mud => Some(5),
            CellKind::Water => Some(10),
            CellKind::Footpath => Some(0),
        }
    }

    pub fn is_passable(self) -> bool {
        self != CellKind::Wall
    }

    /// Maps a roll from `0..100` to terrain: 30% grass, 25% mud, 15% water, 30% footpath.
    pub fn from_roll(roll: u32) -> CellKind {
        match roll {
            0..=29 => CellKind::Grass,
            30..=54 => CellKind::Mud,
            55..=69 => CellKind::Water,
            _ => CellKind::Footpath,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Grass => 'g',
            CellKind::Mud => 'm',
            CellKind::Water => 'w',
            CellKind::Footpath => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellKind> {
        Some(match symbol {
            '#' => CellKind::Wall,
            'g' => CellKind::Grass,
            'm' => CellKind::Mud,
            'w' => CellKind::Water,
            '.' => CellKind::Footpath,
            _ => return None,
        })
    }
}

/// Immutable terrain matrix together with the matching weight matrix.
///
/// The only way to get a [`Grid`] is through [`GridBuilder`] (or [`Grid::parse`], which uses it),
/// so every passable cell's weight always equals [`CellKind::cost`] of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<CellKind>,
    weights: Array2D<u32>,
}

impl Grid {
    /// Builds a grid from rows of [`CellKind::symbol`] characters.
    pub fn parse(rows: &[&str]) -> Result<Grid> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::InvalidLayout("grid is empty".into()));
        }

        let mut builder = GridBuilder::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(Error::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }

            for (col, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or_else(|| {
                    Error::InvalidLayout(format!("unknown symbol {:?} at {}:{}", symbol, row, col))
                })?;
                builder.carve(Coord(row as i32, col as i32), kind);
            }
        }

        Ok(builder.build())
    }

    /// Size as `Coord(rows, columns)`.
    pub fn size(&self) -> Coord {
        self.cells.size()
    }

    pub fn kind(&self, pos: Coord) -> Option<CellKind> {
        self.cells.get(pos).copied()
    }

    /// Weight of the cell, walls report `0`. `None` only outside of the grid.
    pub fn weight(&self, pos: Coord) -> Option<u32> {
        self.weights.get(pos).copied()
    }

    pub fn is_passable(&self, pos: Coord) -> bool {
        self.kind(pos).is_some_and(CellKind::is_passable)
    }

    pub fn passable_neighbors(&self, pos: Coord) -> SmallVec<[Coord; 4]> {
        pos.neighbors().filter(|&n| self.is_passable(n)).collect()
    }

    pub fn iter_passable(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter_pos().filter(|&pos| self.cells[pos].is_passable())
    }

    pub fn cells(&self) -> &Array2D<CellKind> {
        &self.cells
    }

    fn pave(&mut self, pos: Coord) {
        if let (Some(cell), Some(weight)) = (self.cells.get_mut(pos), self.weights.get_mut(pos)) {
            *cell = CellKind::Footpath;
            *weight = 0;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|kind| kind.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Mutable form of a [`Grid`], used only while a maze is being carved.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    cells: Array2D<CellKind>,
    weights: Array2D<u32>,
}

impl GridBuilder {
    /// All-wall grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2D::new(CellKind::Wall, width, height),
            weights: Array2D::new(0, width, height),
        }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn size(&self) -> Coord {
        self.cells.size()
    }

    pub fn kind(&self, pos: Coord) -> Option<CellKind> {
        self.cells.get(pos).copied()
    }

    pub fn is_wall(&self, pos: Coord) -> bool {
        self.kind(pos) == Some(CellKind::Wall)
    }

    /// Sets the kind of a cell along with its weight. Positions outside of the grid are ignored.
    pub fn carve(&mut self, pos: Coord, kind: CellKind) {
        if let (Some(cell), Some(weight)) = (self.cells.get_mut(pos), self.weights.get_mut(pos)) {
            *cell = kind;
            *weight = kind.cost().unwrap_or(0);
        }
    }

    pub fn build(self) -> Grid {
        Grid {
            cells: self.cells,
            weights: self.weights,
        }
    }
}

/// A built grid with its two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Maze {
    /// Both endpoints must be open cells. Whatever their terrain, they become footpath.
    pub fn new(mut grid: Grid, start: Coord, end: Coord) -> Result<Maze> {
        for pos in [start, end] {
            match grid.kind(pos) {
                None => return Err(Error::OutOfBounds(pos)),
                Some(CellKind::Wall) => return Err(Error::Impassable(pos)),
                Some(_) => grid.pave(pos),
            }
        }

        Ok(Maze { grid, start, end })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }
}
