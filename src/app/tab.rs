// SPDX-License-Identifier: MPL-2.0
//! Page-level tab enumeration for storefront navigation.

/// Tabs the user can navigate between. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Friends,
    Campfires,
    AccountSettings,
    UserAccounts,
}

impl Tab {
    /// Fixed display sequence used by arrow-key navigation.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Friends,
        Tab::Campfires,
        Tab::AccountSettings,
        Tab::UserAccounts,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    /// The tab to the right, clamped at the end (no wraparound).
    #[must_use]
    pub fn next(self) -> Tab {
        let index = self.index();
        if index + 1 < Self::ALL.len() {
            Self::ALL[index + 1]
        } else {
            self
        }
    }

    /// The tab to the left, clamped at the start (no wraparound).
    #[must_use]
    pub fn previous(self) -> Tab {
        let index = self.index();
        if index > 0 {
            Self::ALL[index - 1]
        } else {
            self
        }
    }

    /// i18n key for the tab bar label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Friends => "tab-friends",
            Tab::Campfires => "tab-campfires",
            Tab::AccountSettings => "tab-account-settings",
            Tab::UserAccounts => "tab-user-accounts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_clamps_at_last_tab() {
        assert_eq!(Tab::UserAccounts.next(), Tab::UserAccounts);
    }

    #[test]
    fn previous_clamps_at_first_tab() {
        assert_eq!(Tab::Home.previous(), Tab::Home);
    }

    #[test]
    fn arrow_sequence_stays_in_bounds() {
        // Any mix of lefts and rights keeps the index within range.
        let mut tab = Tab::Home;
        let moves = [1, 1, 1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1];
        for step in moves {
            tab = if step > 0 { tab.next() } else { tab.previous() };
            assert!(tab.index() < Tab::ALL.len());
        }
        assert_eq!(tab, Tab::Home);
    }

    #[test]
    fn all_lists_each_tab_once() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
