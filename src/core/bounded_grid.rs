use crate::core::bounds::GridSize;
use crate::core::models::Position;

/// Row-major cells. Indexing out of bounds panics, `get` does not.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoundedGrid<T> {
    size: GridSize,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Returns `None` unless `rows` is exactly `size.height` rows of `size.width` cells.
    pub fn from_rows(size: GridSize, rows: Vec<Vec<T>>) -> Option<Self> {
        if rows.len() != size.height as usize {
            return None;
        }
        if rows.iter().any(|row| row.len() != size.width as usize) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Some(BoundedGrid { size, cells })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.size.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.width.max(1) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.size.iter_positions().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[(index.y * self.size.width + index.x) as usize]
    }
}
