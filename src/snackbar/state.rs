// SPDX-License-Identifier: MPL-2.0
//! Lifecycle states of a snackbar.

use std::fmt;

/// Where a snackbar is in its single pass from creation to dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Constructed, not attached to any host.
    #[default]
    Created,
    /// Attached and waiting for the timer or an explicit dismiss.
    Presented,
    /// Exit animation running.
    DismissRequested,
    /// Detached and callback fired. Terminal.
    Dismissed,
}

impl LifecycleState {
    /// Whether the view is on a host.
    #[must_use]
    pub fn is_on_screen(self) -> bool {
        matches!(self, Self::Presented | Self::DismissRequested)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Dismissed
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Presented => "presented",
            Self::DismissRequested => "dismiss-requested",
            Self::Dismissed => "dismissed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_middle_states_are_on_screen() {
        assert!(!LifecycleState::Created.is_on_screen());
        assert!(LifecycleState::Presented.is_on_screen());
        assert!(LifecycleState::DismissRequested.is_on_screen());
        assert!(!LifecycleState::Dismissed.is_on_screen());
    }

    #[test]
    fn dismissed_is_terminal() {
        assert!(LifecycleState::Dismissed.is_terminal());
        assert!(!LifecycleState::Presented.is_terminal());
        assert_eq!(LifecycleState::default(), LifecycleState::Created);
    }
}
