use bevy::math::IVec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: IVec2,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: IVec2 { x, y }
        }
    }

    pub fn width(&self) -> i32 {
        self.extent.x
    }

    pub fn height(&self) -> i32 {
        self.extent.y
    }

    pub fn contains(&self, pos: &IVec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    /// Every position inside the bounds, row by row.
    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| IVec2 { x, y }))
    }
}
