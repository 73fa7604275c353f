// constraint.rs
// ──────────────────────────────────────────────────────────────────────────────
// The five walk constraints and the layerings that decide them. `None` needs
// no extra state and is answered by a blue-only search; every other
// constraint tags each search state with a small auxiliary value (a red flag,
// the last color, or a clamped red/blue balance).
// ──────────────────────────────────────────────────────────────────────────────
use crate::graph::Color;
use strum::{Display, EnumCount, EnumIter, EnumString};

use super::state::Layering;

/// The walk-acceptance predicates a query can ask for.
///
/// `Constraint::iter()` (from `strum::IntoEnumIterator`) enumerates every
/// supported constraint. Names parse case-insensitively, and the single-letter
/// column names used in the results table are accepted as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Constraint {
    /// No red edge on the walk.
    #[strum(serialize = "none", serialize = "N", to_string = "None")]
    None,
    /// At least one red edge on the walk.
    #[strum(serialize = "some", serialize = "S", to_string = "Some")]
    Some,
    /// Strictly more red edges than blue edges.
    #[strum(serialize = "many", serialize = "M", to_string = "Many")]
    Many,
    /// Strictly more blue edges than red edges.
    #[strum(serialize = "few", serialize = "F", to_string = "Few")]
    Few,
    /// Consecutive edges never share a color.
    #[strum(serialize = "alternate", serialize = "A", to_string = "Alternate")]
    Alternate,
}

impl Constraint {
    /// Column order of the results table.
    pub const TABLE_ORDER: [Constraint; Constraint::COUNT] = [
        Constraint::Alternate,
        Constraint::Few,
        Constraint::Many,
        Constraint::None,
        Constraint::Some,
    ];

    /// Single-letter column header.
    pub fn column(self) -> char {
        match self {
            Constraint::None => 'N',
            Constraint::Some => 'S',
            Constraint::Many => 'M',
            Constraint::Few => 'F',
            Constraint::Alternate => 'A',
        }
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Layerings: one per constraint that needs more than the current vertex.
//─────────────────────────────────────────────────────────────────────────────

/// Some: two layers, before and after the first red edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedFlag;

impl Layering for RedFlag {
    type Aux = bool;

    fn origin(&self) -> bool {
        false
    }

    fn advance(&self, used_red: bool, color: Color) -> Option<bool> {
        Some(used_red || color == Color::Red)
    }

    fn accepts(&self, used_red: bool) -> bool {
        used_red
    }
}

/// Alternate: three layers keyed by the color of the last edge taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastColor;

impl Layering for LastColor {
    type Aux = Option<Color>;

    fn origin(&self) -> Option<Color> {
        None
    }

    fn advance(&self, last: Option<Color>, color: Color) -> Option<Option<Color>> {
        match last {
            Some(previous) if previous == color => None,
            _ => Some(Some(color)),
        }
    }

    // The empty walk alternates trivially.
    fn accepts(&self, _last: Option<Color>) -> bool {
        true
    }
}

/// Many and Few: running balance of favoured minus other edges.
///
/// The balance saturates at `ceiling`: from a balance of `n` or more, any
/// shortest continuation to the target (at most `n - 1` edges) still ends
/// positive, so all such balances behave alike. Balances below `floor` are
/// pruned: when a qualifying walk exists, one of at most `4n - 3` edges
/// exists, and a balance below `-4n` can only be reached deeper than that.
#[derive(Clone, Copy, Debug)]
pub struct Balance {
    favoured: Color,
    ceiling: i64,
    floor: i64,
}

impl Balance {
    pub fn new(favoured: Color, vertex_count: usize) -> Self {
        let n = vertex_count.max(1) as i64;
        Self {
            favoured,
            ceiling: n,
            floor: -4 * n,
        }
    }

    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }

    pub fn floor(&self) -> i64 {
        self.floor
    }
}

impl Layering for Balance {
    type Aux = i64;

    fn origin(&self) -> i64 {
        0
    }

    fn advance(&self, balance: i64, color: Color) -> Option<i64> {
        let next = if color == self.favoured {
            balance + 1
        } else {
            balance - 1
        };
        if next < self.floor {
            return None;
        }
        Some(next.min(self.ceiling))
    }

    fn accepts(&self, balance: i64) -> bool {
        balance > 0
    }
}
