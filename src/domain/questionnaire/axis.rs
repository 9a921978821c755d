//! Score axes and their fixed groupings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the four score accumulators.
///
/// `A`/`B` are the two ends of the outgoing-reserved dimension; `C`/`D`
/// are the two ends of the task-people dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    A,
    B,
    C,
    D,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 4] = [Axis::A, Axis::B, Axis::C, Axis::D];

    /// Returns the grouping this axis belongs to.
    pub fn group(&self) -> AxisGroup {
        match self {
            Axis::A | Axis::B => AxisGroup::AB,
            Axis::C | Axis::D => AxisGroup::CD,
        }
    }

    /// Returns the opposite end of the same dimension.
    pub fn opposite(&self) -> Axis {
        match self {
            Axis::A => Axis::B,
            Axis::B => Axis::A,
            Axis::C => Axis::D,
            Axis::D => Axis::C,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::A => "A",
            Axis::B => "B",
            Axis::C => "C",
            Axis::D => "D",
        };
        write!(f, "{}", s)
    }
}

/// The two disjoint axis groupings a question may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisGroup {
    AB,
    CD,
}

impl AxisGroup {
    pub const ALL: [AxisGroup; 2] = [AxisGroup::AB, AxisGroup::CD];

    /// Returns the two axes of this group in canonical order.
    pub fn axes(&self) -> (Axis, Axis) {
        match self {
            AxisGroup::AB => (Axis::A, Axis::B),
            AxisGroup::CD => (Axis::C, Axis::D),
        }
    }
}

impl fmt::Display for AxisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisGroup::AB => write!(f, "A/B"),
            AxisGroup::CD => write!(f, "C/D"),
        }
    }
}

/// Ordered pair of distinct axes from the same group.
///
/// The first axis receives `6 - v` points and the second `v - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Axis, Axis)", into = "(Axis, Axis)")]
pub struct AxisPair {
    first: Axis,
    second: Axis,
}

impl AxisPair {
    /// Creates a pair, rejecting repeated axes and mixed groups.
    pub fn new(first: Axis, second: Axis) -> Result<Self, ValidationError> {
        if first == second {
            return Err(ValidationError::invalid_format(
                "axis_pair",
                format!("axis {} appears twice", first),
            ));
        }
        if first.group() != second.group() {
            return Err(ValidationError::invalid_format(
                "axis_pair",
                format!("axes {} and {} belong to different groups", first, second),
            ));
        }
        Ok(Self { first, second })
    }

    /// Canonical pair for a group: (A, B) or (C, D).
    pub fn canonical(group: AxisGroup) -> Self {
        let (first, second) = group.axes();
        Self { first, second }
    }

    pub fn first(&self) -> Axis {
        self.first
    }

    pub fn second(&self) -> Axis {
        self.second
    }

    pub fn group(&self) -> AxisGroup {
        self.first.group()
    }
}

impl TryFrom<(Axis, Axis)> for AxisPair {
    type Error = ValidationError;

    fn try_from((first, second): (Axis, Axis)) -> Result<Self, Self::Error> {
        AxisPair::new(first, second)
    }
}

impl From<AxisPair> for (Axis, Axis) {
    fn from(pair: AxisPair) -> Self {
        (pair.first, pair.second)
    }
}
