//! Attack and check detection.
//!
//! A square counts as attacked when it is among the pseudo-legal targets of
//! some piece of the attacking side, so these queries reuse the generators
//! in [`crate::movegen`] rather than a separate attack table.

use crate::{board::Board, movegen::attacks_square, types::*};

impl Board {
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        let mut buf = Vec::with_capacity(28);
        self.pieces(by)
            .any(|piece| attacks_square(&piece, self, target, &mut buf))
    }

    /// A side without a king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(ksq) => self.is_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Plays `mv` on a throwaway clone and reports whether `c` would be in
    /// check afterwards. `self` is never modified.
    pub fn would_cause_own_check(&self, mv: Move, c: Color) -> bool {
        self.after_move(mv).in_check(c)
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
