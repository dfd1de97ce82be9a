use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week used to key the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    /// Display order for the day selector (Monday first).
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    /// Ordinal positions as reported by the calendar, Sunday = 0.
    pub const FROM_SUNDAY: [DayKey; 7] = [
        DayKey::Sunday,
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Monday => "monday",
            DayKey::Tuesday => "tuesday",
            DayKey::Wednesday => "wednesday",
            DayKey::Thursday => "thursday",
            DayKey::Friday => "friday",
            DayKey::Saturday => "saturday",
            DayKey::Sunday => "sunday",
        }
    }

    /// Full Greek name shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            DayKey::Monday => "Δευτέρα",
            DayKey::Tuesday => "Τρίτη",
            DayKey::Wednesday => "Τετάρτη",
            DayKey::Thursday => "Πέμπτη",
            DayKey::Friday => "Παρασκευή",
            DayKey::Saturday => "Σάββατο",
            DayKey::Sunday => "Κυριακή",
        }
    }

    /// Abbreviation used on the day chips.
    pub fn short_label(self) -> &'static str {
        match self {
            DayKey::Monday => "Δευ",
            DayKey::Tuesday => "Τρι",
            DayKey::Wednesday => "Τετ",
            DayKey::Thursday => "Πεμ",
            DayKey::Friday => "Παρ",
            DayKey::Saturday => "Σαβ",
            DayKey::Sunday => "Κυρ",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position inside the four week menu rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekKey {
    Week1,
    Week2,
    Week3,
    Week4,
}

impl WeekKey {
    pub const ALL: [WeekKey; 4] = [WeekKey::Week1, WeekKey::Week2, WeekKey::Week3, WeekKey::Week4];

    /// Maps a rotation index onto a week. Indices wrap around the cycle.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }

    pub fn index(self) -> u8 {
        match self {
            WeekKey::Week1 => 0,
            WeekKey::Week2 => 1,
            WeekKey::Week3 => 2,
            WeekKey::Week4 => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekKey::Week1 => "week1",
            WeekKey::Week2 => "week2",
            WeekKey::Week3 => "week3",
            WeekKey::Week4 => "week4",
        }
    }

    /// Chip text, e.g. "2ή Εβδομάδα".
    pub fn label(self) -> String {
        format!("{}ή Εβδομάδα", self.index() + 1)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to storage.
    pub fn as_stored(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` selects the dark theme; anything else is light.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Theme state as seen by the UI, including the window before storage answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Unloaded,
    Light,
    Dark,
}

impl ThemePreference {
    /// `None` while unloaded; callers must not render themed content then.
    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            ThemePreference::Unloaded => None,
            ThemePreference::Light => Some(ThemeMode::Light),
            ThemePreference::Dark => Some(ThemeMode::Dark),
        }
    }

    /// Flips a loaded preference. An unloaded preference stays unloaded.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Unloaded => ThemePreference::Unloaded,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl From<ThemeMode> for ThemePreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemePreference::Light,
            ThemeMode::Dark => ThemePreference::Dark,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub first: Vec<String>,
    pub main: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub lunch: Meal,
    pub dinner: Meal,
}

/// The (week, day) pair used to look up a [`DailyMenu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuSelection {
    pub week: WeekKey,
    pub day: DayKey,
}
