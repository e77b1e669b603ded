/// One grid cell. `color` holds whatever representation the surface last
/// stored for it; `None` means the cell still shows the default background.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub color: Option<String>,
}

impl Cell {
    pub fn new() -> Self {
        Cell { color: None }
    }

    pub fn with_color(color: impl Into<String>) -> Self {
        Cell {
            color: Some(color.into()),
        }
    }

    pub fn is_set(&self) -> bool {
        self.color.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.color = None;
    }
}

/// Dense grid of cells addressed by index
#[derive(Clone, Debug, Default)]
pub struct CellGrid {
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(total_cells: usize) -> Self {
        CellGrid {
            cells: vec![Cell::new(); total_cells],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_unset() {
        let grid = CellGrid::new(6);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|(_, cell)| !cell.is_set()));
        assert!(grid.get(6).is_none());
    }

    #[test]
    fn blank_string_counts_as_unset() {
        let mut cell = Cell::with_color("");
        assert!(!cell.is_set());
        cell = Cell::with_color("  \t ");
        assert!(!cell.is_set());

        cell = Cell::with_color("#00FF00");
        assert!(cell.is_set());
        cell.clear();
        assert_eq!(cell, Cell::new());
    }
}
