use crate::prelude::*;

use core::iter::Peekable;
use core::str::Chars;
use smallvec::SmallVec;

type Moves = SmallVec<[Move; 16]>;

/// A flat sequence of moves. Groups and repeat counts are expanded while parsing, so nothing
/// nested survives into an `Algorithm`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Moves,
}

impl Algorithm {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The formal inverse: moves in reverse order, each one reversed. Half turns are their own
    /// inverse.
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|m| m.reverse()).collect()
    }
}

/// Parses and re-prints `algorithm` in canonical notation.
pub fn normalize(algorithm: &str) -> Result<String, ParseError> {
    Ok(algorithm.parse::<Algorithm>()?.to_string())
}

/// Canonical notation of the inverse of `algorithm`.
pub fn invert(algorithm: &str) -> Result<String, ParseError> {
    Ok(algorithm.parse::<Algorithm>()?.inverse().to_string())
}

impl core::str::FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Algorithm, ParseError> {
        let moves = Parser::new(s).parse()?;
        log::debug!("Parsed {} moves from {:?}", moves.len(), s);
        Ok(Algorithm { moves })
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Algorithm {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = Move;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().copied()
    }
}

/// Longest sequence a repeated group may expand to.
const MAX_MOVES: usize = 100_000;

/// Single pass over the notation. Open groups are kept on an explicit stack, so nesting depth
/// is only limited by memory.
struct Parser<'s> {
    chars: Peekable<Chars<'s>>,
}

impl<'s> Parser<'s> {
    fn new(input: &'s str) -> Self {
        Parser {
            chars: input.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Moves, ParseError> {
        let mut current = Moves::new();
        let mut open: Vec<Moves> = Vec::new();

        while let Some(&c) = self.chars.peek() {
            match c {
                c if c.is_whitespace() || c == ',' => {
                    self.chars.next();
                }
                '(' => {
                    self.chars.next();
                    open.push(std::mem::take(&mut current));
                }
                ')' => {
                    let Some(parent) = open.pop() else {
                        return Err(ParseError::UnexpectedClose);
                    };
                    self.chars.next();
                    let group = std::mem::replace(&mut current, parent);
                    let count = self.repeat_count()?;
                    let total = group
                        .len()
                        .checked_mul(count)
                        .and_then(|n| n.checked_add(current.len()))
                        .filter(|&n| n <= MAX_MOVES)
                        .ok_or_else(|| ParseError::RepeatCount(count.to_string()))?;
                    current.reserve(total - current.len());
                    for _ in 0..count {
                        current.extend_from_slice(&group);
                    }
                }
                _ => {
                    self.chars.next();
                    current.push(self.parse_move(c)?);
                }
            }
        }

        if !open.is_empty() {
            return Err(ParseError::UnclosedGroup);
        }
        Ok(current)
    }

    fn parse_move(&mut self, letter: char) -> Result<Move, ParseError> {
        let mut face = MoveFace::from_letter(letter).ok_or(ParseError::InvalidMove(letter))?;

        if self.chars.next_if_eq(&'w').is_some() {
            face = face.widened();
        }

        let mut direction = Direction::Single;
        if self.chars.next_if_eq(&'2').is_some() {
            direction = Direction::Double;
        }
        if self.chars.next_if(|&c| c == '\'' || c == '`').is_some() {
            // A half turn has no separate prime form.
            if direction != Direction::Double {
                direction = Direction::Reverse;
            }
        }

        Ok(Move { face, direction })
    }

    /// Digits directly after a closing parenthesis. Defaults to 1.
    fn repeat_count(&mut self) -> Result<usize, ParseError> {
        let mut digits = String::new();
        while let Some(d) = self.chars.next_if(char::is_ascii_digit) {
            digits.push(d);
        }
        if digits.is_empty() {
            return Ok(1);
        }
        digits
            .parse()
            .map_err(|_| ParseError::RepeatCount(digits))
    }
}
