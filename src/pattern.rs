//! Reduces a cube to what an OLL diagram shows: which top-layer facelets are the top color.

use crate::prelude::*;

use serde::Serialize;

/// Top layer cubies of each side face, read left to right while looking at that face.
const SIDE_ROWS: [(Face, [Vector; 3]); 4] = [
    (
        Face::Front,
        [Vector::new(-1, 1, 1), Vector::new(0, 1, 1), Vector::new(1, 1, 1)],
    ),
    (
        Face::Right,
        [Vector::new(1, 1, 1), Vector::new(1, 1, 0), Vector::new(1, 1, -1)],
    ),
    (
        Face::Back,
        [Vector::new(1, 1, -1), Vector::new(0, 1, -1), Vector::new(-1, 1, -1)],
    ),
    (
        Face::Left,
        [Vector::new(-1, 1, -1), Vector::new(-1, 1, 0), Vector::new(-1, 1, 1)],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    #[serde(rename = "U")]
    pub up: [bool; 9],
    #[serde(rename = "F")]
    pub front: [bool; 3],
    #[serde(rename = "R")]
    pub right: [bool; 3],
    #[serde(rename = "B")]
    pub back: [bool; 3],
    #[serde(rename = "L")]
    pub left: [bool; 3],
}

/// Pattern of the last layer that `algorithm` solves, found by undoing it from a solved cube.
pub fn preview_pattern(algorithm: &str) -> Result<Pattern, ParseError> {
    let algorithm: Algorithm = algorithm.parse()?;
    Ok(Pattern::for_algorithm(&algorithm))
}

impl Pattern {
    /// Shown when a case's algorithm can't be read: plain top face, nothing on the sides.
    pub fn fallback() -> Pattern {
        Pattern {
            up: [true; 9],
            front: [false; 3],
            right: [false; 3],
            back: [false; 3],
            left: [false; 3],
        }
    }

    pub fn for_algorithm(algorithm: &Algorithm) -> Pattern {
        let cube = CubeState::solved().apply_all(&algorithm.inverse());
        log::trace!("Undid {}:\n{}", algorithm, cube);
        Pattern::extract(&cube)
    }

    pub fn preview_or_fallback(algorithm: &str) -> Pattern {
        preview_pattern(algorithm).unwrap_or_else(|e| {
            log::warn!("Using fallback preview for {:?}: {}", algorithm, e);
            Pattern::fallback()
        })
    }

    pub fn extract(cube: &CubeState) -> Pattern {
        let top = Face::Up.color();

        let mut up = [false; 9];
        for cubie in cube.cubies().iter().filter(|c| c.position.y == 1) {
            if let Some(color) = cubie.facelet(Face::Up) {
                up[up_index(cubie.position)] = color == top;
            }
        }

        let [front, right, back, left] = SIDE_ROWS.map(|(face, positions)| {
            positions.map(|position| {
                cube.cubie_at(position)
                    .and_then(|cubie| cubie.facelet(face))
                    .map_or(false, |color| color == top)
            })
        });

        Pattern {
            up,
            front,
            right,
            back,
            left,
        }
    }
}

/// Raster index of a top-layer position: rows run back to front, columns left to right.
fn up_index(position: Vector) -> usize {
    ((position.z + 1) * 3 + (position.x + 1)) as usize
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cell = |lit: bool| if lit { '#' } else { '.' };
        let row = |cells: &[bool]| cells.iter().map(|&c| cell(c)).collect::<String>();

        writeln!(f, " {} ", row(&self.back))?;
        for i in 0..3 {
            writeln!(
                f,
                "{}{}{}",
                cell(self.left[i]),
                row(&self.up[i * 3..i * 3 + 3]),
                cell(self.right[i])
            )?;
        }
        write!(f, " {} ", row(&self.front))
    }
}
