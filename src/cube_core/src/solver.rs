//! The opaque solver boundary.
//!
//! The engine never searches for solutions itself; it hands a facelet
//! string and a search budget to an injected [`CubeSolver`] and parses
//! whatever move tokens come back.

use std::sync::OnceLock;

use log::debug;
use thiserror::Error;

use crate::cube::Cube;
use crate::facelets::Facelets;
use crate::moves::MoveSeries;

/// Default search depth budget handed to solver backends.
pub const DEFAULT_MAX_DEPTH: u32 = 24;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The backend found no solution within its search budget, or
    /// failed/timed out internally.
    #[error("solver found no solution within the search budget: {0}")]
    SolveFailed(String),
    /// The backend answered, but with tokens the move parser rejects.
    /// Distinct from [`SolveFailed`](SolverError::SolveFailed) so
    /// callers can tell "no solution in budget" from an encoding
    /// mismatch.
    #[error("solver returned unparseable moves: `{0}`")]
    UnparseableMoves(String),
}

/// An external solving routine, treated as opaque: facelet string and
/// budget in, move-token string out.
pub trait CubeSolver {
    /// One-time setup (table generation, cache warm-up). Guaranteed to
    /// run at most once when the solver is wrapped in a
    /// [`PreparedSolver`].
    fn prepare(&self) -> Result<(), SolverError> {
        Ok(())
    }

    /// Solve the state described by `facelets` within `max_depth`
    /// moves, returning a space-separated move-token string.
    fn solve(&self, facelets: &Facelets, max_depth: u32) -> Result<String, SolverError>;
}

/// Wraps a solver so that [`CubeSolver::prepare`] runs exactly once,
/// even under concurrent first use.
pub struct PreparedSolver<S> {
    inner: S,
    prepared: OnceLock<Result<(), SolverError>>,
}

impl<S: CubeSolver> PreparedSolver<S> {
    pub fn new(inner: S) -> PreparedSolver<S> {
        PreparedSolver {
            inner,
            prepared: OnceLock::new(),
        }
    }

    fn ensure_prepared(&self) -> Result<(), SolverError> {
        self.prepared
            .get_or_init(|| {
                debug!("preparing solver backend");
                self.inner.prepare()
            })
            .clone()
    }
}

impl<S: CubeSolver> CubeSolver for PreparedSolver<S> {
    fn solve(&self, facelets: &Facelets, max_depth: u32) -> Result<String, SolverError> {
        self.ensure_prepared()?;
        self.inner.solve(facelets, max_depth)
    }
}

impl Cube {
    /// Ask `solver` for a solution to this state.
    ///
    /// The solved cube short-circuits to an empty series without
    /// consulting the backend.
    pub fn solution_with<S: CubeSolver>(
        &self,
        solver: &S,
        max_depth: u32,
    ) -> Result<MoveSeries, SolverError> {
        if self.is_solved() {
            return Ok(MoveSeries::default());
        }

        let tokens = solver.solve(&self.facelets(), max_depth)?;
        tokens
            .parse()
            .map_err(|_| SolverError::UnparseableMoves(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake backend that inverts the move list it was built from.
    struct ScriptedSolver {
        answer: Result<String, SolverError>,
        prepare_calls: AtomicUsize,
    }

    impl ScriptedSolver {
        fn answering(answer: &str) -> ScriptedSolver {
            ScriptedSolver {
                answer: Ok(answer.to_owned()),
                prepare_calls: AtomicUsize::new(0),
            }
        }
    }

    impl CubeSolver for ScriptedSolver {
        fn prepare(&self) -> Result<(), SolverError> {
            self.prepare_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn solve(&self, _facelets: &Facelets, _max_depth: u32) -> Result<String, SolverError> {
            self.answer.clone()
        }
    }

    #[test]
    fn solved_cube_needs_no_backend() {
        struct PanickingSolver;
        impl CubeSolver for PanickingSolver {
            fn solve(&self, _: &Facelets, _: u32) -> Result<String, SolverError> {
                panic!("the solved cube must not reach the backend");
            }
        }

        let solution = Cube::default()
            .solution_with(&PanickingSolver, DEFAULT_MAX_DEPTH)
            .unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn backend_answer_is_parsed_and_applied() {
        let scramble: MoveSeries = "R U F2".parse().unwrap();
        let cube = Cube::from_moves(&scramble);
        let solver = ScriptedSolver::answering("F2 U' R'");
        let solution = cube.solution_with(&solver, DEFAULT_MAX_DEPTH).unwrap();
        assert!(cube.applying_series(&solution).is_solved());
    }

    #[test]
    fn unparseable_answer_is_a_distinct_error() {
        let cube = Cube::from_moves(&"R".parse().unwrap());
        let solver = ScriptedSolver::answering("R7 garbage");
        assert_eq!(
            cube.solution_with(&solver, DEFAULT_MAX_DEPTH),
            Err(SolverError::UnparseableMoves("R7 garbage".to_owned()))
        );

        let failing = ScriptedSolver {
            answer: Err(SolverError::SolveFailed("depth exhausted".to_owned())),
            prepare_calls: AtomicUsize::new(0),
        };
        assert!(matches!(
            cube.solution_with(&failing, 1),
            Err(SolverError::SolveFailed(_))
        ));
    }

    #[test]
    fn prepare_runs_once() {
        let cube = Cube::from_moves(&"U".parse().unwrap());
        let solver = PreparedSolver::new(ScriptedSolver::answering("U'"));
        for _ in 0..3 {
            cube.solution_with(&solver, DEFAULT_MAX_DEPTH).unwrap();
        }
        assert_eq!(solver.inner.prepare_calls.load(Ordering::SeqCst), 1);
    }
}
