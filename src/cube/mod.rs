use crate::prelude::*;

mod cubie;
mod state;
mod vector;

pub use cubie::Cubie;
pub use state::CubeState;
pub use vector::{Axis, Vector};

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence)]
pub enum Color {
    Yellow,
    White,
    Green,
    Blue,
    Red,
    Orange,
}

pub fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}

impl Face {
    pub const COUNT: usize = 6;

    pub fn index(self) -> usize {
        self as usize
    }

    /// The color this face shows on a solved cube.
    pub fn color(self) -> Color {
        match self {
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> Vector {
        match self {
            Face::Up => Vector::new(0, 1, 0),
            Face::Down => Vector::new(0, -1, 0),
            Face::Front => Vector::new(0, 0, 1),
            Face::Back => Vector::new(0, 0, -1),
            Face::Right => Vector::new(1, 0, 0),
            Face::Left => Vector::new(-1, 0, 0),
        }
    }

    pub fn from_normal(normal: Vector) -> Option<Face> {
        all_faces().find(|face| face.normal() == normal)
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert_eq!(CubeState::solved(), CubeState::solved());
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(
            CubeState::solved().apply("F2".parse().unwrap()),
            CubeState::solved()
        );
    }

    #[test]
    fn normals_round_trip() {
        for face in all_faces() {
            assert_eq!(Face::from_normal(face.normal()), Some(face));
        }
    }

    #[test]
    fn non_unit_normal_is_no_face() {
        assert_eq!(Face::from_normal(Vector::new(1, 1, 0)), None);
    }

    #[test]
    fn face_colors_are_distinct() {
        let mut colors = all_faces().map(Face::color).collect::<Vec<_>>();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Face::COUNT);
    }
}
