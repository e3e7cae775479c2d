use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, PrintStyledContent, Stylize as _},
};
use cterra::{CellKind, Coord, Maze, Path, Report};

pub const START_CHAR: char = 'S';
pub const END_CHAR: char = 'E';
pub const PATH_CHAR: char = '*';

fn terrain_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Wall => Color::DarkGrey,
        CellKind::Grass => Color::Green,
        CellKind::Mud => Color::DarkYellow,
        CellKind::Water => Color::Blue,
        CellKind::Footpath => Color::Grey,
    }
}

/// Character and color of a single cell, with the path drawn on top of the terrain.
pub fn cell(maze: &Maze, path: Option<&Path>, pos: Coord) -> (char, Color) {
    let kind = maze.grid().kind(pos).unwrap_or(CellKind::Wall);
    if pos == maze.start() {
        (START_CHAR, Color::Magenta)
    } else if pos == maze.end() {
        (END_CHAR, Color::Red)
    } else if path.is_some_and(|p| p.contains(pos)) {
        (PATH_CHAR, Color::Yellow)
    } else {
        (kind.symbol(), terrain_color(kind))
    }
}

/// Uncolored snapshot, one line per row.
pub fn snapshot(maze: &Maze, path: Option<&Path>) -> Vec<String> {
    let Coord(rows, cols) = maze.size();
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| cell(maze, path, Coord(row, col)).0)
                .collect()
        })
        .collect()
}

pub fn draw(out: &mut impl Write, maze: &Maze, path: Option<&Path>, color: bool) -> io::Result<()> {
    if !color {
        for line in snapshot(maze, path) {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let Coord(rows, cols) = maze.size();
    for row in 0..rows {
        for col in 0..cols {
            let (ch, fg) = cell(maze, path, Coord(row, col));
            queue!(out, PrintStyledContent(ch.with(fg)))?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// One-line summary of a finished run.
pub fn stats(report: &Report) -> String {
    format!(
        "{} / {}: exploration steps {}, solution steps {}, path cost {}, solve time {:.3} ms",
        report.traversal,
        report.solver,
        report.exploration_steps(),
        report.solution_steps(),
        report.cost,
        report.solve_time.as_secs_f64() * 1000.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cterra::{solve, Grid, Solver};

    #[test]
    fn path_overlay() {
        let grid = Grid::parse(&[
            "#####", //
            "#...#", //
            "#.#m#", //
            "#...#", //
            "#####", //
        ])
        .unwrap();
        let maze = Maze::new(grid, Coord(1, 1), Coord(3, 3)).unwrap();
        let path = solve(&maze, Solver::Dijkstra).unwrap();

        assert_eq!(
            snapshot(&maze, Some(&path)),
            vec!["#####", "#S..#", "#*#m#", "#**E#", "#####"]
        );
        assert_eq!(snapshot(&maze, None)[2], "#.#m#");
    }

    #[test]
    fn plain_draw_matches_snapshot() {
        let grid = Grid::parse(&["####", "#.g#", "####"]).unwrap();
        let maze = Maze::new(grid, Coord(1, 1), Coord(1, 2)).unwrap();
        let mut out = Vec::new();
        draw(&mut out, &maze, None, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "####\n#SE#\n####\n");
    }
}
