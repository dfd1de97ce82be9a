//! Static menu data shipped with the app.

use crate::types::{DailyMenu, DayKey, Meal, MenuSelection, WeekKey};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::BTreeMap;

const BUNDLED_MENU: &str = include_str!("../assets/menu.json");

static BUNDLED: OnceCell<MenuBook> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Menu data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu has no entry for {week} {day}")]
    MissingEntry { week: WeekKey, day: DayKey },

    #[error("Menu {meal} for {week} {day} lists no dishes")]
    EmptyMeal {
        week: WeekKey,
        day: DayKey,
        meal: &'static str,
    },
}

/// Every daily menu of the rotation, keyed by week then day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MenuBook {
    weeks: BTreeMap<WeekKey, BTreeMap<DayKey, DailyMenu>>,
}

impl MenuBook {
    /// Parses and validates a menu. All 28 week/day slots must be filled.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let book: MenuBook = serde_json::from_str(json)?;
        book.validate()?;
        Ok(book)
    }

    /// The menu compiled into the binary, parsed on first use.
    pub fn bundled() -> Result<&'static MenuBook, MenuError> {
        BUNDLED.get_or_try_init(|| {
            let book = Self::from_json(BUNDLED_MENU)?;
            tracing::debug!("loaded bundled menu");
            Ok(book)
        })
    }

    fn validate(&self) -> Result<(), MenuError> {
        for week in WeekKey::ALL {
            for day in DayKey::ALL {
                let daily = self
                    .daily(week, day)
                    .ok_or(MenuError::MissingEntry { week, day })?;
                for (meal, name) in [(&daily.lunch, "lunch"), (&daily.dinner, "dinner")] {
                    if is_empty(meal) {
                        return Err(MenuError::EmptyMeal {
                            week,
                            day,
                            meal: name,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn daily(&self, week: WeekKey, day: DayKey) -> Option<&DailyMenu> {
        self.weeks.get(&week)?.get(&day)
    }

    pub fn select(&self, selection: MenuSelection) -> Option<&DailyMenu> {
        self.daily(selection.week, selection.day)
    }
}

fn is_empty(meal: &Meal) -> bool {
    meal.first.is_empty() && meal.main.is_empty()
}
