use crate::logic::footprint::planting_footprint;
use crate::models::planting::Planting;
use crate::models::{Coord, Matrix};

/// Derived state of a single grid cell. Anchor and continuation cells carry
/// a non-owning index into the planting slice the grid was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Top-left origin of a planting's footprint.
    Anchor(usize),
    /// Covered by a planting's footprint, but not its origin.
    Continuation(usize),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Index of the planting claiming this cell, if any.
    pub fn occupant(&self) -> Option<usize> {
        match self {
            CellState::Empty => None,
            CellState::Anchor(idx) | CellState::Continuation(idx) => Some(*idx),
        }
    }
}

/// Projection of a planting list onto a bed grid. Rebuilt from scratch on
/// every change to the list or the bed dimensions, never patched in place.
#[derive(Debug, Clone)]
pub struct Occupancy {
    cols: usize,
    rows: usize,
    cells: Matrix<CellState>,
}

impl Occupancy {
    /// Marks every placed planting's footprint block, silently clipping at
    /// the bed edges. Plantings without grid coordinates are skipped. The
    /// builder performs no conflict detection; overlap prevention is the
    /// validator's job, run before any mutation is issued.
    pub fn build(plantings: &[Planting], cols: usize, rows: usize) -> Self {
        let mut cells = vec![vec![CellState::Empty; cols]; rows];
        for (idx, planting) in plantings.iter().enumerate() {
            let (Some(gx), Some(gy)) = (planting.grid_x, planting.grid_y) else {
                continue;
            };
            let fp = planting_footprint(planting) as i32;
            for dy in 0..fp {
                for dx in 0..fp {
                    let cx = gx + dx;
                    let cy = gy + dy;
                    if cx >= 0 && (cx as usize) < cols && cy >= 0 && (cy as usize) < rows {
                        cells[cy as usize][cx as usize] = if dx == 0 && dy == 0 {
                            CellState::Anchor(idx)
                        } else {
                            CellState::Continuation(idx)
                        };
                    }
                }
            }
        }
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, cell: Coord) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.cols
            && (cell.y as usize) < self.rows
    }

    pub fn cell(&self, cell: Coord) -> Option<&CellState> {
        if self.in_bounds(cell) {
            Some(&self.cells[cell.y as usize][cell.x as usize])
        } else {
            None
        }
    }

    /// Index of the planting occupying a cell, if the cell is in bounds and
    /// not empty.
    pub fn occupant(&self, cell: Coord) -> Option<usize> {
        self.cell(cell).and_then(|c| c.occupant())
    }
}

/// Cells a footprint anchored at `origin` would cover, clipped to the grid.
pub fn footprint_cells(origin: Coord, footprint: u32, cols: usize, rows: usize) -> Vec<Coord> {
    let mut covered = Vec::new();
    for dy in 0..footprint as i32 {
        for dx in 0..footprint as i32 {
            let cell = origin.offset(dx, dy);
            if cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < cols && (cell.y as usize) < rows
            {
                covered.push(cell);
            }
        }
    }
    covered
}

/// Test fixture shared by the engine unit tests.
#[cfg(test)]
pub(crate) fn test_planting(id: i64, x: i32, y: i32, spacing: f64) -> Planting {
    use crate::models::planting::PlantingPlant;
    use chrono::Utc;

    Planting {
        id,
        bed_id: 1,
        plant_id: id,
        plant: Some(PlantingPlant {
            id,
            common_name: format!("Plant {id}"),
            scientific_name: None,
            plant_type: None,
            spacing_inches: Some(spacing),
            image_url: None,
            source: "test".into(),
        }),
        status: "active".into(),
        date_planted: None,
        quantity: 1,
        notes: None,
        grid_x: Some(x),
        grid_y: Some(y),
        is_locked: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
