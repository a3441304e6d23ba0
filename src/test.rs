use crate::prelude::*;

use quickcheck::{Arbitrary, Gen};
use rand::seq::SliceRandom;

pub fn cube_with_moves(moves: &str) -> CubeState {
    CubeState::solved().apply_all(Move::parse_sequence(moves).unwrap())
}

const DIRECTIONS: [Direction; 3] = [Direction::Single, Direction::Double, Direction::Reverse];

impl Arbitrary for Move {
    fn arbitrary<G: Gen>(g: &mut G) -> Move {
        let faces = MoveFace::all().collect::<Vec<_>>();
        Move {
            face: *faces.choose(g).unwrap(),
            direction: *DIRECTIONS.choose(g).unwrap(),
        }
    }
}

impl Arbitrary for Algorithm {
    fn arbitrary<G: Gen>(g: &mut G) -> Algorithm {
        Vec::<Move>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Algorithm>> {
        let moves = self.moves().to_vec();
        Box::new(moves.shrink().map(|moves| moves.into_iter().collect()))
    }
}
