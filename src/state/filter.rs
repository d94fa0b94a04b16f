//! Era filter.

use crate::model::Era;

/// Set of eras whose events are shown in the list.
///
/// All eras are enabled by default. Disabling every era is allowed and
/// leaves the list empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraFilter {
    enabled: [bool; 5],
}

impl EraFilter {
    /// Filter showing every era.
    pub fn all() -> Self {
        Self { enabled: [true; 5] }
    }

    /// Filter showing only the given eras.
    pub fn only(eras: impl IntoIterator<Item = Era>) -> Self {
        let mut enabled = [false; 5];
        for era in eras {
            enabled[era.index()] = true;
        }
        Self { enabled }
    }

    /// Whether events of `era` are shown.
    pub fn is_enabled(&self, era: Era) -> bool {
        self.enabled[era.index()]
    }

    /// Flip one era.
    pub fn toggle(&mut self, era: Era) {
        self.enabled[era.index()] = !self.enabled[era.index()];
    }

    /// Show one era.
    pub fn enable(&mut self, era: Era) {
        self.enabled[era.index()] = true;
    }

    /// Show every era.
    pub fn show_all(&mut self) {
        self.enabled = [true; 5];
    }

    /// Whether every era is shown.
    pub fn is_unfiltered(&self) -> bool {
        self.enabled.iter().all(|enabled| *enabled)
    }

    /// Enabled eras in chronological order.
    pub fn enabled_eras(&self) -> Vec<Era> {
        Era::ALL
            .into_iter()
            .filter(|era| self.is_enabled(*era))
            .collect()
    }
}

impl Default for EraFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_every_era() {
        let filter = EraFilter::default();
        assert!(filter.is_unfiltered());
        assert_eq!(filter.enabled_eras(), Era::ALL.to_vec());
    }

    #[test]
    fn toggle_flips_one_era() {
        let mut filter = EraFilter::default();
        filter.toggle(Era::Modern);
        assert!(!filter.is_enabled(Era::Modern));
        assert!(filter.is_enabled(Era::Ancient));
        assert!(!filter.is_unfiltered());

        filter.toggle(Era::Modern);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn only_enables_listed_eras() {
        let filter = EraFilter::only([Era::Classical, Era::Contemporary]);
        assert_eq!(filter.enabled_eras(), vec![Era::Classical, Era::Contemporary]);
    }

    #[test]
    fn show_all_restores_every_era() {
        let mut filter = EraFilter::only([]);
        assert!(filter.enabled_eras().is_empty());
        filter.show_all();
        assert!(filter.is_unfiltered());
    }
}
