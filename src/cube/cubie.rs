use crate::prelude::*;

/// One of the 27 unit cubes. Each face slot holds at most one color, so a cubie can never carry
/// two facelets pointing the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    pub position: Vector,
    facelets: [Option<Color>; Face::COUNT],
}

impl Cubie {
    /// The cubie found at `position` on a solved cube.
    pub fn solved(position: Vector) -> Cubie {
        let mut facelets = [None; Face::COUNT];
        for face in all_faces() {
            let normal = face.normal();
            let on_face = [Axis::X, Axis::Y, Axis::Z].into_iter().any(|axis| {
                let n = normal.component(axis);
                n != 0 && n == position.component(axis)
            });
            if on_face {
                facelets[face.index()] = Some(face.color());
            }
        }
        Cubie { position, facelets }
    }

    pub fn facelet(&self, face: Face) -> Option<Color> {
        self.facelets[face.index()]
    }

    pub fn facelets(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        all_faces().filter_map(move |face| self.facelet(face).map(|color| (face, color)))
    }

    /// Quarter turn of the cubie about `axis`, moving both its position and its facelets.
    pub fn rotate(&mut self, axis: Axis, dir: i8) {
        self.position = self.position.rotate(axis, dir);

        let mut rotated = [None; Face::COUNT];
        for (face, color) in self.facelets() {
            match Face::from_normal(face.normal().rotate(axis, dir)) {
                Some(to) => rotated[to.index()] = Some(color),
                None => log::warn!("Dropping {} facelet of cubie at {:?}", face, self.position),
            }
        }
        self.facelets = rotated;
    }

    /// Whether no color appears twice among this cubie's facelets.
    pub fn has_unique_colors(&self) -> bool {
        let mut seen = [false; Face::COUNT];
        self.facelets().all(|(_, color)| {
            let slot = &mut seen[color as usize];
            !std::mem::replace(slot, true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_facelets() {
        let cubie = Cubie::solved(Vector::new(1, 1, 1));
        assert_eq!(
            cubie.facelets().collect::<Vec<_>>(),
            vec![
                (Face::Up, Color::Yellow),
                (Face::Front, Color::Green),
                (Face::Right, Color::Red)
            ]
        );
    }

    #[test]
    fn facelet_counts_by_kind() {
        assert_eq!(Cubie::solved(Vector::new(0, 1, 1)).facelets().count(), 2);
        assert_eq!(Cubie::solved(Vector::new(0, -1, 0)).facelets().count(), 1);
        assert_eq!(Cubie::solved(Vector::new(0, 0, 0)).facelets().count(), 0);
    }

    #[test]
    fn rotating_moves_facelets_with_position() {
        // U-F edge, turned a quarter about y, ends up as the U-R edge.
        let mut cubie = Cubie::solved(Vector::new(0, 1, 1));
        cubie.rotate(Axis::Y, 1);
        assert_eq!(cubie.position, Vector::new(1, 1, 0));
        assert_eq!(cubie.facelet(Face::Up), Some(Color::Yellow));
        assert_eq!(cubie.facelet(Face::Right), Some(Color::Green));
        assert_eq!(cubie.facelet(Face::Front), None);
    }

    #[test]
    fn solved_cubies_have_unique_colors() {
        assert!(Cubie::solved(Vector::new(-1, -1, -1)).has_unique_colors());
    }

    #[test]
    fn duplicate_colors_are_detected() {
        let mut cubie = Cubie::solved(Vector::new(1, 1, 0));
        cubie.facelets[Face::Right.index()] = Some(Color::Yellow);
        assert!(!cubie.has_unique_colors());
    }
}
