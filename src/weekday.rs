use chrono::Weekday;

/// Canonical weekday abbreviations, Monday first.
///
/// This is both the default name table for parsing and the fixed vocabulary
/// used by [`Schedule::render`](crate::Schedule::render).
pub(crate) const WEEKDAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

bitflags::bitflags! {
    /// Days of the week as a 7-bit set, Monday = bit 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WeekdaySet: u8 {
        const MON = 1 << 0;
        const TUE = 1 << 1;
        const WED = 1 << 2;
        const THU = 1 << 3;
        const FRI = 1 << 4;
        const SAT = 1 << 5;
        const SUN = 1 << 6;
    }
}

impl WeekdaySet {
    /// The set holding exactly the day with the given index (Monday = 0).
    pub(crate) fn only(index: u8) -> Self {
        Self::from_bits_truncate(1 << index)
    }

    /// Inclusive ascending span of day indexes.
    pub(crate) fn span(start: u8, end: u8) -> Self {
        let mut days = Self::empty();
        for index in start..=end {
            days |= Self::only(index);
        }
        days
    }

    /// Whether this set covers the given calendar weekday.
    pub fn contains_day(self, day: Weekday) -> bool {
        self.contains(Self::only(day.num_days_from_monday() as u8))
    }

    /// Comma-joined canonical abbreviations in ascending day order.
    pub(crate) fn abbreviations(self) -> String {
        (0u8..7)
            .filter(|index| self.contains(Self::only(*index)))
            .map(|index| WEEKDAY_NAMES[index as usize])
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_inclusive() {
        assert_eq!(WeekdaySet::span(1, 3), WeekdaySet::TUE | WeekdaySet::WED | WeekdaySet::THU);
        assert_eq!(WeekdaySet::span(4, 4), WeekdaySet::FRI);
    }

    #[test]
    fn all_covers_the_whole_week() {
        assert_eq!(WeekdaySet::all(), WeekdaySet::span(0, 6));
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(WeekdaySet::all().contains_day(day));
        }
    }

    #[test]
    fn contains_day_maps_monday_to_bit_zero() {
        assert!(WeekdaySet::MON.contains_day(Weekday::Mon));
        assert!(!WeekdaySet::MON.contains_day(Weekday::Sun));
        assert!(WeekdaySet::SUN.contains_day(Weekday::Sun));
    }

    #[test]
    fn abbreviations_are_ascending() {
        let days = WeekdaySet::SUN | WeekdaySet::MON | WeekdaySet::FRI;
        assert_eq!(days.abbreviations(), "mon,fri,sun");
        assert_eq!(WeekdaySet::all().abbreviations(), "mon,tue,wed,thu,fri,sat,sun");
    }
}
