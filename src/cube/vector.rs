/// One of the three principal axes of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An integer position or direction in the 3x3x3 grid centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Vector {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Vector { x, y, z }
    }

    pub fn component(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Rotates a quarter turn about `axis`. `dir > 0` is counter-clockwise looking down the
    /// positive axis towards the origin, anything else is clockwise.
    pub fn rotate(self, axis: Axis, dir: i8) -> Self {
        let Vector { x, y, z } = self;
        let ccw = dir > 0;
        match (axis, ccw) {
            (Axis::X, true) => Vector::new(x, -z, y),
            (Axis::X, false) => Vector::new(x, z, -y),
            (Axis::Y, true) => Vector::new(z, y, -x),
            (Axis::Y, false) => Vector::new(-z, y, x),
            (Axis::Z, true) => Vector::new(-y, x, z),
            (Axis::Z, false) => Vector::new(y, -x, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[test]
    fn x_rotation() {
        let v = Vector::new(1, 0, 1);
        assert_eq!(v.rotate(Axis::X, 1), Vector::new(1, -1, 0));
        assert_eq!(v.rotate(Axis::X, -1), Vector::new(1, 1, 0));
    }

    #[test]
    fn y_rotation_moves_front_to_right() {
        assert_eq!(Vector::new(0, 0, 1).rotate(Axis::Y, 1), Vector::new(1, 0, 0));
        assert_eq!(Vector::new(0, 0, 1).rotate(Axis::Y, -1), Vector::new(-1, 0, 0));
    }

    #[test]
    fn z_rotation() {
        assert_eq!(Vector::new(1, 0, 0).rotate(Axis::Z, 1), Vector::new(0, 1, 0));
        assert_eq!(Vector::new(1, 0, 0).rotate(Axis::Z, -1), Vector::new(0, -1, 0));
    }

    #[test]
    fn opposite_directions_cancel() {
        let v = Vector::new(1, -1, 0);
        for axis in AXES {
            assert_eq!(v.rotate(axis, 1).rotate(axis, -1), v);
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let v = Vector::new(-1, 1, 1);
        for axis in AXES {
            let turned = (0..4).fold(v, |v, _| v.rotate(axis, 1));
            assert_eq!(turned, v);
        }
    }

    #[test]
    fn axis_component_is_fixed() {
        let v = Vector::new(1, 0, -1);
        for axis in AXES {
            assert_eq!(v.rotate(axis, 1).component(axis), v.component(axis));
        }
    }
}
