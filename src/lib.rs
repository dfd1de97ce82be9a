//! Weekly cafeteria menu client.
//!
//! The core is UI independent:
//! - `rotation` maps a date onto a (week, day) menu slot
//! - `preferences` persists the light/dark theme through `storage`
//! - `menu` holds the bundled menu data
//!
//! The Dioxus front end lives in `ui` and `views` behind the `dioxus` feature.

pub mod config;
pub mod logging;
pub mod menu;
pub mod preferences;
pub mod rotation;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
