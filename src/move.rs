use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: MoveFace,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

/// Everything a move letter can turn: an outer face, a slice, two layers at once, or the whole
/// cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum MoveFace {
    R,
    L,
    U,
    D,
    F,
    B,
    M,
    E,
    S,
    WideR,
    WideL,
    WideU,
    WideD,
    WideF,
    WideB,
    X,
    Y,
    Z,
}

/// How a move letter acts on the cube: which layers along `axis` turn, and which way a plain
/// (unprimed) turn goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveConfig {
    pub axis: Axis,
    pub layers: &'static [i8],
    pub dir: i8,
}

const OUTER_POS: &[i8] = &[1];
const OUTER_NEG: &[i8] = &[-1];
const MIDDLE: &[i8] = &[0];
const WIDE_POS: &[i8] = &[1, 0];
const WIDE_NEG: &[i8] = &[-1, 0];
const ALL: &[i8] = &[-1, 0, 1];

impl MoveFace {
    pub fn all() -> impl Iterator<Item = MoveFace> {
        enum_iterator::all()
    }

    pub fn config(self) -> MoveConfig {
        use MoveFace::*;

        let (axis, layers, dir) = match self {
            R => (Axis::X, OUTER_POS, 1),
            L => (Axis::X, OUTER_NEG, -1),
            U => (Axis::Y, OUTER_POS, 1),
            D => (Axis::Y, OUTER_NEG, -1),
            F => (Axis::Z, OUTER_NEG, -1),
            B => (Axis::Z, OUTER_POS, 1),
            M => (Axis::X, MIDDLE, -1),
            E => (Axis::Y, MIDDLE, -1),
            S => (Axis::Z, MIDDLE, -1),
            WideR => (Axis::X, WIDE_POS, 1),
            WideL => (Axis::X, WIDE_NEG, -1),
            WideU => (Axis::Y, WIDE_POS, 1),
            WideD => (Axis::Y, WIDE_NEG, -1),
            WideF => (Axis::Z, WIDE_NEG, -1),
            WideB => (Axis::Z, WIDE_POS, 1),
            X => (Axis::X, ALL, 1),
            Y => (Axis::Y, ALL, 1),
            Z => (Axis::Z, ALL, -1),
        };
        MoveConfig { axis, layers, dir }
    }

    pub fn from_letter(c: char) -> Option<MoveFace> {
        MoveFace::all().find(|face| face.letter() == c)
    }

    pub fn letter(self) -> char {
        use MoveFace::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
            M => 'M',
            E => 'E',
            S => 'S',
            WideR => 'r',
            WideL => 'l',
            WideU => 'u',
            WideD => 'd',
            WideF => 'f',
            WideB => 'b',
            X => 'x',
            Y => 'y',
            Z => 'z',
        }
    }

    /// The two-layer form of an outer face turn. Other letters are already wide, slices or
    /// rotations and stay as they are.
    pub fn widened(self) -> MoveFace {
        use MoveFace::*;

        match self {
            R => WideR,
            L => WideL,
            U => WideU,
            D => WideD,
            F => WideF,
            B => WideB,
            other => other,
        }
    }
}

impl Direction {
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Double => 2,
            Direction::Single | Direction::Reverse => 1,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        }
    }
}

impl Move {
    pub fn new(face: MoveFace, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseError> {
        Ok(s.parse::<Algorithm>()?.into_iter().collect())
    }

    pub fn reverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.reverse(),
        }
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let moves = Move::parse_sequence(s)?;
        match moves.as_slice() {
            [m] => Ok(*m),
            [] => Err(anyhow::anyhow!("No face for move")),
            _ => Err(anyhow::anyhow!("Expected a single move, got {}", moves.len())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let suffix = match self.direction {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        };
        write!(f, "{}{}", self.face.letter(), suffix)
    }
}
