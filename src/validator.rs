//! Checks case data by running every case through the cube engine.

use crate::prelude::*;

use std::collections::HashSet;

/// Structural diagnostics for one case, taken after undoing its algorithm from solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseReport {
    pub top_stickers: usize,
    pub valid_faces: bool,
    pub valid_colors: bool,
    pub valid_cubies: bool,
    pub uses_cube_rotation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub validated: usize,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// x and z only reorient the cube for the setup; the preview ignores them.
fn is_stripped_rotation(m: &Move) -> bool {
    matches!(m.face, MoveFace::X | MoveFace::Z)
}

/// The validation algorithm with x and z moves removed after parsing, so a token like `xR`
/// keeps its `R`. Also returns whether anything was removed.
fn stripped_algorithm(case: &Case) -> Result<(Algorithm, bool), ParseError> {
    let algorithm: Algorithm = case.validation_algorithm().parse()?;
    let uses_cube_rotation = algorithm.moves().iter().any(is_stripped_rotation);
    let stripped = algorithm
        .into_iter()
        .filter(|m| !is_stripped_rotation(m))
        .collect::<Algorithm>();
    Ok((stripped, uses_cube_rotation))
}

pub fn validate_case(case: &Case) -> Result<CaseReport, ParseError> {
    let (stripped, uses_cube_rotation) = stripped_algorithm(case)?;
    let cube = CubeState::solved().apply_all(&stripped.inverse());
    Ok(CaseReport {
        top_stickers: cube.top_sticker_count(),
        valid_faces: cube.face_counts_valid(),
        valid_colors: cube.color_counts_valid(),
        valid_cubies: cube.cubies_valid(),
        uses_cube_rotation,
    })
}

/// Validates every case, collecting all problems instead of stopping at the first.
pub fn validate(data: &CaseData, source: &str) -> Report {
    let mut report = Report::default();
    let mut seen = HashSet::new();

    if data.groups.is_empty() {
        report
            .errors
            .push(format!("No OLL groups found in {}.", source));
    }

    for group in &data.groups {
        for bad in &group.malformed {
            report.errors.push(format!(
                "Case {} in group \"{}\" is malformed: {}",
                bad.position, group.name, bad.error
            ));
        }
    }

    for (group, case) in data.cases() {
        let title = case.title();
        match &case.number {
            None => report
                .errors
                .push(format!("Case in group \"{}\" has no number.", group.name)),
            Some(number) => {
                if !seen.insert(number) {
                    report
                        .errors
                        .push(format!("Duplicate OLL number detected: {}", number));
                }
            }
        }

        if let Some(category) = &case.category {
            if *category != group.name {
                report.warnings.push(format!(
                    "{} category mismatch: \"{}\" vs group \"{}\"",
                    title, category, group.name
                ));
            }
        }

        let result = match validate_case(case) {
            Ok(result) => result,
            Err(e) => {
                report
                    .errors
                    .push(format!("{} has an unreadable algorithm: {}", title, e));
                continue;
            }
        };
        log::debug!("{}: {:?}", title, result);

        if result.top_stickers != 9 {
            report
                .errors
                .push(format!("{} does not keep 9 stickers on the U face.", title));
        }
        if !result.valid_faces {
            report
                .errors
                .push(format!("{} breaks face sticker counts.", title));
        }
        if !result.valid_colors {
            report.errors.push(format!("{} breaks color counts.", title));
        }
        if !result.valid_cubies {
            report
                .errors
                .push(format!("{} produces duplicate stickers on a cubie.", title));
        }
        if result.uses_cube_rotation {
            report.warnings.push(format!(
                "{} uses x/z rotations that are stripped for previews.",
                title
            ));
        }
    }

    report.validated = seen.len();
    report
}
