use bevy::math::IVec2;
use crate::core::bounds::BoundsOriginRoot;

#[derive(Clone, Debug)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid by asking `make_cell` for every position, row by row.
    pub fn from_fn<F>(bounds: BoundsOriginRoot, make_cell: F) -> Self
    where
        F: FnMut(IVec2) -> T,
    {
        let cells = bounds.iter_positions().map(make_cell).collect();
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &IVec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &IVec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &IVec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> {
        self.bounds.iter_positions().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&IVec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &IVec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&IVec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &IVec2) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
