//! Two-speed multiply/xor recurrence
//!
//! A [`StateMachine`] holds six equal-length word sequences ("lanes" share an
//! index across all six) and two cursors.
//!
//! # Recurrence
//!
//! Each call to [`StateMachine::next_word`]:
//! 1. `v = (mult_a[m] * mult_x[m] + mult_b[m]) ^ xor_x[x]` (wrapping)
//! 2. `mult_x[m] = v`
//! 3. advance `m`; when it wraps to 0, step the slow lane:
//!    `xor_x[x] = (xor_a[x] ^ xor_x[x]) + xor_b[x]` (wrapping), then advance `x`
//!
//! The xor lane at `x` advances exactly once per full sweep of `m`.
//!
//! # Invariants
//!
//! For every lane `i`: `mult_a[i] % 4 == 1`, `mult_b[i] % 2 == 1`,
//! `xor_a[i] % 2 == 0`, `xor_b[i] % 2 == 1`. Both cursors lie in `[0, lanes)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifies one of the six word sequences
///
/// [`Sequence::ALL`] lists them in the order they are extracted while seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sequence {
    MultX,
    MultA,
    MultB,
    XorX,
    XorA,
    XorB,
}

impl Sequence {
    /// All sequences, in seeding/extraction order
    pub const ALL: [Sequence; 6] = [
        Sequence::MultX,
        Sequence::MultA,
        Sequence::MultB,
        Sequence::XorX,
        Sequence::XorA,
        Sequence::XorB,
    ];

    /// Key used for this sequence in the textual state dump
    pub fn label(self) -> &'static str {
        match self {
            Sequence::MultX => "v_x_mult",
            Sequence::MultA => "v_a_mult",
            Sequence::MultB => "v_b_mult",
            Sequence::XorX => "v_x_xor",
            Sequence::XorA => "v_a_xor",
            Sequence::XorB => "v_b_xor",
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural problems found when validating a state machine
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("State machine has no lanes")]
    NoLanes,

    #[error("Sequence {sequence} has {actual} lanes, expected {expected}")]
    LengthMismatch {
        sequence: Sequence,
        expected: usize,
        actual: usize,
    },

    #[error("Cursor {cursor} = {value} is outside [0, {lanes})")]
    CursorOutOfRange {
        cursor: &'static str,
        value: usize,
        lanes: usize,
    },

    #[error("Sequence {sequence} lane {lane} holds {value:#018X}, which breaks its parity invariant")]
    InvariantViolated {
        sequence: Sequence,
        lane: usize,
        value: u64,
    },
}

/// Recurrence engine emitting the output word stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMachine {
    mult_x: Vec<u64>,
    mult_a: Vec<u64>,
    mult_b: Vec<u64>,
    xor_x: Vec<u64>,
    xor_a: Vec<u64>,
    xor_b: Vec<u64>,
    idx_mult: usize,
    idx_xor: usize,
}

impl StateMachine {
    /// All-zero state with `lanes` lanes and both cursors at 0
    ///
    /// The result does NOT satisfy the lane invariants until the sequences
    /// are filled and [`StateMachine::enforce_invariants`] has run.
    pub(crate) fn zeroed(lanes: usize) -> Self {
        Self {
            mult_x: vec![0; lanes],
            mult_a: vec![0; lanes],
            mult_b: vec![0; lanes],
            xor_x: vec![0; lanes],
            xor_a: vec![0; lanes],
            xor_b: vec![0; lanes],
            idx_mult: 0,
            idx_xor: 0,
        }
    }

    /// Build a state machine from explicit sequences, cursors at 0
    ///
    /// Sequences are given in [`Sequence::ALL`] order. They are taken as-is
    /// and must already satisfy the lane invariants.
    ///
    /// # Errors
    /// Returns [`StateError`] if lengths differ, no lanes exist, or an
    /// invariant does not hold.
    ///
    /// # Example
    /// ```
    /// use hashmix_prng_core_rs::StateMachine;
    ///
    /// let sm = StateMachine::from_sequences([
    ///     vec![3, 4],
    ///     vec![5, 9],
    ///     vec![1, 7],
    ///     vec![0, 0],
    ///     vec![2, 6],
    ///     vec![1, 3],
    /// ])
    /// .unwrap();
    /// assert_eq!(sm.lanes(), 2);
    /// ```
    pub fn from_sequences(sequences: [Vec<u64>; 6]) -> Result<Self, StateError> {
        let [mult_x, mult_a, mult_b, xor_x, xor_a, xor_b] = sequences;
        let sm = Self {
            mult_x,
            mult_a,
            mult_b,
            xor_x,
            xor_a,
            xor_b,
            idx_mult: 0,
            idx_xor: 0,
        };
        sm.validate()?;
        Ok(sm)
    }

    /// Number of lanes (`M`)
    pub fn lanes(&self) -> usize {
        self.mult_x.len()
    }

    /// Cursor into the multiply lanes
    pub fn idx_mult(&self) -> usize {
        self.idx_mult
    }

    /// Cursor into the xor lanes
    pub fn idx_xor(&self) -> usize {
        self.idx_xor
    }

    /// Read-only view of one sequence
    pub fn sequence(&self, sequence: Sequence) -> &[u64] {
        match sequence {
            Sequence::MultX => &self.mult_x,
            Sequence::MultA => &self.mult_a,
            Sequence::MultB => &self.mult_b,
            Sequence::XorX => &self.xor_x,
            Sequence::XorA => &self.xor_a,
            Sequence::XorB => &self.xor_b,
        }
    }

    pub(crate) fn sequence_mut(&mut self, sequence: Sequence) -> &mut [u64] {
        match sequence {
            Sequence::MultX => &mut self.mult_x,
            Sequence::MultA => &mut self.mult_a,
            Sequence::MultB => &mut self.mult_b,
            Sequence::XorX => &mut self.xor_x,
            Sequence::XorA => &mut self.xor_a,
            Sequence::XorB => &mut self.xor_b,
        }
    }

    /// Force every lane to satisfy the parity invariants
    ///
    /// `mult_a += 1 - mult_a % 4`, `mult_b += 1 - mult_b % 2`,
    /// `xor_a -= xor_a % 2`, `xor_b += 1 - xor_b % 2`, all wrapping.
    pub(crate) fn enforce_invariants(&mut self) {
        for a in self.mult_a.iter_mut() {
            *a = a.wrapping_add(1).wrapping_sub(*a % 4);
        }
        for b in self.mult_b.iter_mut() {
            *b = b.wrapping_add(1).wrapping_sub(*b % 2);
        }
        for a in self.xor_a.iter_mut() {
            *a = a.wrapping_sub(*a % 2);
        }
        for b in self.xor_b.iter_mut() {
            *b = b.wrapping_add(1).wrapping_sub(*b % 2);
        }
    }

    /// Check lane count, cursor range and parity invariants
    pub fn validate(&self) -> Result<(), StateError> {
        let lanes = self.lanes();
        if lanes == 0 {
            return Err(StateError::NoLanes);
        }

        for sequence in Sequence::ALL {
            let actual = self.sequence(sequence).len();
            if actual != lanes {
                return Err(StateError::LengthMismatch {
                    sequence,
                    expected: lanes,
                    actual,
                });
            }
        }

        for (cursor, value) in [("idx_mult", self.idx_mult), ("idx_xor", self.idx_xor)] {
            if value >= lanes {
                return Err(StateError::CursorOutOfRange {
                    cursor,
                    value,
                    lanes,
                });
            }
        }

        let checks: [(Sequence, u64, u64); 4] = [
            (Sequence::MultA, 4, 1),
            (Sequence::MultB, 2, 1),
            (Sequence::XorA, 2, 0),
            (Sequence::XorB, 2, 1),
        ];
        for (sequence, modulus, residue) in checks {
            if let Some((lane, &value)) = self
                .sequence(sequence)
                .iter()
                .enumerate()
                .find(|(_, v)| **v % modulus != residue)
            {
                return Err(StateError::InvariantViolated {
                    sequence,
                    lane,
                    value,
                });
            }
        }

        Ok(())
    }

    /// Advance the recurrence by one step and return the emitted word
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        let m = self.idx_mult;
        let x = self.idx_xor;

        let value = self.mult_a[m]
            .wrapping_mul(self.mult_x[m])
            .wrapping_add(self.mult_b[m])
            ^ self.xor_x[x];
        self.mult_x[m] = value;

        self.idx_mult += 1;
        if self.idx_mult >= self.lanes() {
            self.idx_mult = 0;

            self.xor_x[x] = (self.xor_a[x] ^ self.xor_x[x]).wrapping_add(self.xor_b[x]);

            self.idx_xor += 1;
            if self.idx_xor >= self.lanes() {
                self.idx_xor = 0;
            }
        }

        value
    }

    /// Replace this state with an independent deep copy of `other`
    ///
    /// Reuses existing allocations where possible. No storage is shared with
    /// `other` afterwards.
    pub fn copy_from(&mut self, other: &Self) {
        self.mult_x.clone_from(&other.mult_x);
        self.mult_a.clone_from(&other.mult_a);
        self.mult_b.clone_from(&other.mult_b);
        self.xor_x.clone_from(&other.xor_x);
        self.xor_a.clone_from(&other.xor_a);
        self.xor_b.clone_from(&other.xor_b);
        self.idx_mult = other.idx_mult;
        self.idx_xor = other.idx_xor;
    }
}
