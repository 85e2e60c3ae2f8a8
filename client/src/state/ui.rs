//! Page-level UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which overlay surfaces are showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the in-page panorama tour is showing.
    pub tour_open: bool,
    /// Unit the tour was opened for; `None` starts at the first unit.
    pub tour_unit: Option<String>,
    /// Bumped every time the tour opens so the viewer remounts fresh.
    pub tour_seq: u64,
    /// Mobile navigation drawer.
    pub nav_open: bool,
}

impl UiState {
    pub fn open_tour(&mut self, unit: Option<&str>) {
        self.tour_open = true;
        self.tour_unit = unit.map(str::to_owned);
        self.tour_seq += 1;
        self.nav_open = false;
    }

    /// Close the tour. Returns whether it was open.
    pub fn close_tour(&mut self) -> bool {
        let was_open = self.tour_open;
        self.tour_open = false;
        was_open
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }
}
