use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Delivery flags chosen at timer creation.
///
/// A bitset selecting which message the dispatcher posts and what
/// delivery is gated on. [`REFRESH`](Self::REFRESH) and
/// [`STEP_FORWARD`](Self::STEP_FORWARD) are mutually exclusive;
/// creation rejects the combination.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct TickFlags(u32);

impl TickFlags {
    /// No special behavior: deliver the default synthetic tick.
    pub const NONE: Self = Self(0);

    /// Deliver a refresh command instead of a tick.
    pub const REFRESH: Self = Self(1);

    /// Deliver a step-forward command instead of a tick.
    pub const STEP_FORWARD: Self = Self(2);

    /// Suppress delivery while the target window has no visible region.
    pub const VISIBLE_ONLY: Self = Self(4);

    /// Intended to suppress delivery outside trading hours. Accepted
    /// but inert; creation warns that the gating is unimplemented.
    pub const WEEKEND_PAUSE: Self = Self(8);

    /// Returns whether all bits of `other` are set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether both delivery-mode flags are set.
    pub fn has_conflicting_delivery(self) -> bool {
        self.contains(Self::REFRESH) && self.contains(Self::STEP_FORWARD)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for TickFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TickFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for TickFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickFlags(0b{:04b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitor_combines_and_contains_checks_each_bit() {
        let flags = TickFlags::REFRESH | TickFlags::VISIBLE_ONLY;

        assert!(flags.contains(TickFlags::REFRESH));
        assert!(flags.contains(TickFlags::VISIBLE_ONLY));
        assert!(!flags.contains(TickFlags::STEP_FORWARD));
    }

    #[test]
    fn delivery_modes_conflict_only_when_both_set() {
        assert!((TickFlags::REFRESH | TickFlags::STEP_FORWARD).has_conflicting_delivery());
        assert!(!TickFlags::REFRESH.has_conflicting_delivery());
        assert!(!TickFlags::NONE.has_conflicting_delivery());
    }

    #[test]
    fn none_is_contained_in_everything() {
        assert!(TickFlags::NONE.contains(TickFlags::NONE));
        assert!(TickFlags::WEEKEND_PAUSE.contains(TickFlags::NONE));
    }
}
