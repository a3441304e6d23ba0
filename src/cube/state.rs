use crate::prelude::*;

const CUBIE_COUNT: usize = 27;

lazy_static::lazy_static! {
    static ref SOLVED: CubeState = CubeState::build_solved();
}

/// All 27 cubies of a 3x3 cube, positioned and colored.
#[derive(Debug, Clone)]
pub struct CubeState {
    cubies: [Cubie; CUBIE_COUNT],
}

impl super::CubeLike for CubeState {
    fn solved() -> CubeState {
        SOLVED.clone()
    }

    fn apply(mut self, move_: Move) -> Self {
        self.apply_move(move_);
        self
    }
}

impl PartialEq for CubeState {
    // Positions are a bijection onto the grid, so matching every cubie by position is enough.
    fn eq(&self, other: &Self) -> bool {
        self.cubies
            .iter()
            .all(|cubie| other.cubie_at(cubie.position) == Some(cubie))
    }
}

impl Eq for CubeState {}

impl CubeState {
    fn build_solved() -> CubeState {
        let coord = |i: usize| i as i8 - 1;
        CubeState {
            cubies: std::array::from_fn(|i| {
                Cubie::solved(Vector::new(coord(i / 9), coord((i / 3) % 3), coord(i % 3)))
            }),
        }
    }

    pub fn apply_move(&mut self, move_: Move) {
        let MoveConfig { axis, layers, dir } = move_.face.config();
        let dir = match move_.direction {
            Direction::Reverse => -dir,
            Direction::Single | Direction::Double => dir,
        };
        log::trace!("Applying {} ({:?} {:?} {})", move_, axis, layers, dir);

        for _ in 0..move_.direction.quarter_turns() {
            self.cubies
                .iter_mut()
                .filter(|cubie| layers.contains(&cubie.position.component(axis)))
                .for_each(|cubie| cubie.rotate(axis, dir));
        }
    }

    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    pub fn cubie_at(&self, position: Vector) -> Option<&Cubie> {
        self.cubies.iter().find(|cubie| cubie.position == position)
    }

    pub fn is_solved(&self) -> bool {
        *self == *SOLVED
    }

    /// Number of top-layer cubies with a facelet pointing up.
    pub fn top_sticker_count(&self) -> usize {
        self.cubies
            .iter()
            .filter(|cubie| cubie.position.y == 1 && cubie.facelet(Face::Up).is_some())
            .count()
    }

    /// Each face label is carried by exactly 9 facelets.
    pub fn face_counts_valid(&self) -> bool {
        let mut counts = [0; Face::COUNT];
        for (face, _) in self.cubies.iter().flat_map(|cubie| cubie.facelets()) {
            counts[face.index()] += 1;
        }
        counts.iter().all(|&count| count == 9)
    }

    /// Each color appears on exactly 9 facelets.
    pub fn color_counts_valid(&self) -> bool {
        let mut counts = [0; Face::COUNT];
        for (_, color) in self.cubies.iter().flat_map(|cubie| cubie.facelets()) {
            counts[color as usize] += 1;
        }
        counts.iter().all(|&count| count == 9)
    }

    pub fn cubies_valid(&self) -> bool {
        self.cubies.iter().all(Cubie::has_unique_colors)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for cubie in &self.cubies {
            let Vector { x, y, z } = cubie.position;
            write!(f, "({:2},{:2},{:2})", x, y, z)?;
            for (face, color) in cubie.facelets() {
                write!(f, " {}:{}", face, color)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_structure(cube: &CubeState) {
        assert!(cube.face_counts_valid());
        assert!(cube.color_counts_valid());
        assert!(cube.cubies_valid());
        assert_eq!(cube.top_sticker_count(), 9);
    }

    #[test]
    fn solved_structure() {
        let cube = CubeState::solved();
        assert!(cube.is_solved());
        assert_structure(&cube);
    }

    #[test]
    fn positions_are_unique() {
        let cube = cube_with_moves("R U x M' d2 S");
        let mut positions = cube.cubies().iter().map(|c| c.position).collect::<Vec<_>>();
        positions.sort();
        positions.dedup();
        assert_eq!(positions.len(), CUBIE_COUNT);
    }

    #[test]
    fn r_carries_back_colors_up() {
        let cube = cube_with_moves("R");
        let cubie = cube.cubie_at(Vector::new(1, 1, 1)).unwrap();
        assert_eq!(cubie.facelet(Face::Up), Some(Color::Blue));
        assert_eq!(cubie.facelet(Face::Front), Some(Color::Yellow));
        assert_eq!(cubie.facelet(Face::Right), Some(Color::Red));
    }

    #[test]
    fn u_carries_left_colors_front() {
        let cube = cube_with_moves("U");
        let cubie = cube.cubie_at(Vector::new(-1, 1, 1)).unwrap();
        assert_eq!(cubie.facelet(Face::Up), Some(Color::Yellow));
        assert_eq!(cubie.facelet(Face::Front), Some(Color::Orange));
        assert_eq!(cubie.facelet(Face::Left), Some(Color::Blue));
    }

    #[test]
    fn f_turns_the_negative_z_layer() {
        let cube = cube_with_moves("F");
        let untouched = cube.cubie_at(Vector::new(1, 0, 1)).unwrap();
        assert_eq!(untouched, &Cubie::solved(Vector::new(1, 0, 1)));

        let turned = cube.cubie_at(Vector::new(1, 0, -1)).unwrap();
        assert_eq!(turned.facelet(Face::Right), Some(Color::Yellow));
        assert_eq!(turned.facelet(Face::Back), Some(Color::Blue));
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for letter in ["R", "U", "F", "M", "E", "S", "r", "d", "x", "y", "z"] {
            let sequence = [letter; 4].join(" ");
            assert!(cube_with_moves(&sequence).is_solved(), "{}", sequence);
        }
    }

    #[test]
    fn double_is_two_singles() {
        assert_eq!(cube_with_moves("R2 U2 M2"), cube_with_moves("R R U U M M"));
    }

    #[test]
    fn prime_is_three_singles() {
        assert_eq!(cube_with_moves("F' b'"), cube_with_moves("F F F b b b"));
    }

    #[test]
    fn wide_is_face_plus_slice() {
        assert_eq!(cube_with_moves("r"), cube_with_moves("R M'"));
        assert_eq!(cube_with_moves("u"), cube_with_moves("U E'"));
        assert_eq!(cube_with_moves("f"), cube_with_moves("F S"));
    }

    #[test]
    fn rotation_is_all_layers() {
        assert_eq!(cube_with_moves("x"), cube_with_moves("R M' L'"));
        assert_eq!(cube_with_moves("y"), cube_with_moves("U E' D'"));
        assert_eq!(cube_with_moves("z"), cube_with_moves("F S B'"));
    }

    #[test]
    fn trigger_has_order_six() {
        let sequence = ["R U R' U'"; 6].join(" ");
        assert!(cube_with_moves(&sequence).is_solved());
        assert!(!cube_with_moves("R U R' U'").is_solved());
    }

    #[quickcheck]
    fn structure_holds_after_any_moves(moves: Vec<Move>) -> bool {
        let cube = CubeState::solved().apply_all(moves);
        cube.face_counts_valid()
            && cube.color_counts_valid()
            && cube.cubies_valid()
            && cube.top_sticker_count() == 9
    }
}
