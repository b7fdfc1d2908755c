//! Weighted directed graphs with planar coordinates, and a grid parser.

use thiserror::Error;

/// Fixture construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("grid is empty")]
    EmptyGrid,
    #[error("grid row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("grid is missing its {0} marker")]
    MissingMarker(char),
    #[error("unknown grid cell {0:?}")]
    UnknownCell(char),
    #[error("edge endpoint {0} out of range")]
    BadEndpoint(u32),
}

/// A directed graph over vertices `0..n`, each with an `(x, y)` position.
#[derive(Debug, Clone)]
pub struct World {
    positions: Vec<[f64; 2]>,
    edges: Vec<Vec<(u32, f64)>>,
    pub start: u32,
    pub goal: u32,
}

impl World {
    /// A world with the given vertex positions and no edges.
    #[must_use]
    pub fn new(positions: Vec<[f64; 2]>, start: u32, goal: u32) -> Self {
        let edges = vec![Vec::new(); positions.len()];
        Self {
            positions,
            edges,
            start,
            goal,
        }
    }

    /// Add an undirected edge of the given cost.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BadEndpoint`] for a vertex outside the world.
    pub fn connect(&mut self, a: u32, b: u32, cost: f64) -> Result<(), WorldError> {
        for v in [a, b] {
            if v as usize >= self.edges.len() {
                return Err(WorldError::BadEndpoint(v));
            }
        }
        self.edges[a as usize].push((b, cost));
        self.edges[b as usize].push((a, cost));
        Ok(())
    }

    /// Outgoing `(vertex, cost)` pairs in insertion order.
    #[must_use]
    pub fn successors(&self, v: u32) -> &[(u32, f64)] {
        self.edges.get(v as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cost of the edge `a -> b`, if there is one.
    #[must_use]
    pub fn edge_cost(&self, a: u32, b: u32) -> Option<f64> {
        self.successors(a)
            .iter()
            .find(|(to, _)| *to == b)
            .map(|(_, c)| *c)
    }

    /// Position of `v`.
    #[must_use]
    pub fn position(&self, v: u32) -> [f64; 2] {
        self.positions[v as usize]
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the world has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Parse a 4-connected unit-cost grid.
    ///
    /// `.` is open, `#` is a wall, `S` and `G` mark start and goal. Vertex id
    /// of cell `(x, y)` is `y * width + x`.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] for empty or ragged grids, unknown cells, or a
    /// missing start or goal.
    pub fn grid(rows: &[&str]) -> Result<Self, WorldError> {
        let width = rows.first().ok_or(WorldError::EmptyGrid)?.chars().count();
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(WorldError::RaggedRow {
                    row,
                    width: line.len(),
                    expected: width,
                });
            }
        }

        let id = |x: usize, y: usize| u32::try_from(y * width + x).unwrap_or(u32::MAX);
        let mut positions = Vec::with_capacity(width * cells.len());
        let mut start = None;
        let mut goal = None;
        for (y, line) in cells.iter().enumerate() {
            for (x, &c) in line.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let pos = [x as f64, y as f64];
                positions.push(pos);
                match c {
                    'S' => start = Some(id(x, y)),
                    'G' => goal = Some(id(x, y)),
                    '.' | '#' => {}
                    other => return Err(WorldError::UnknownCell(other)),
                }
            }
        }

        let mut world = World::new(
            positions,
            start.ok_or(WorldError::MissingMarker('S'))?,
            goal.ok_or(WorldError::MissingMarker('G'))?,
        );
        let open = |x: usize, y: usize| cells[y][x] != '#';
        for y in 0..cells.len() {
            for x in 0..width {
                if !open(x, y) {
                    continue;
                }
                if x + 1 < width && open(x + 1, y) {
                    world.connect(id(x, y), id(x + 1, y), 1.0)?;
                }
                if y + 1 < cells.len() && open(x, y + 1) {
                    world.connect(id(x, y), id(x, y + 1), 1.0)?;
                }
            }
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_parses_markers_and_walls() {
        let w = World::grid(&["S#", ".G"]).unwrap();
        assert_eq!(w.len(), 4);
        assert_eq!((w.start, w.goal), (0, 3));
        assert!(w.successors(1).is_empty(), "walls have no edges");
        assert_eq!(w.edge_cost(0, 2), Some(1.0));
        assert_eq!(w.edge_cost(0, 1), None);
        assert_eq!(w.position(3), [1.0, 1.0]);
    }

    #[test]
    fn grid_errors() {
        assert_eq!(World::grid(&[]).unwrap_err(), WorldError::EmptyGrid);
        assert!(matches!(
            World::grid(&["S.", "G"]).unwrap_err(),
            WorldError::RaggedRow { row: 1, .. }
        ));
        assert_eq!(
            World::grid(&["S."]).unwrap_err(),
            WorldError::MissingMarker('G')
        );
        assert_eq!(
            World::grid(&["S?G"]).unwrap_err(),
            WorldError::UnknownCell('?')
        );
    }
}
