use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: "☀️",
            toggle_label: "Switch to light theme",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: "🌙",
            toggle_label: "Switch to dark theme",
        },
    }
}

/// Layout rules shared by both themes.
pub const BASE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
.root { min-height: 100vh; display: flex; flex-direction: column; background: var(--color-bg-primary); }
.header { padding: 16px; display: flex; justify-content: space-between; align-items: center; background: var(--color-header-bg); border-bottom: 1px solid var(--color-header-border); }
.header-day { font-size: 20px; font-weight: 700; color: var(--color-text-primary); margin: 0; }
.header-subtitle { font-size: 13px; color: var(--color-text-muted); margin: 0; }
.theme-button { padding: 8px; border-radius: 20px; border: none; background: transparent; font-size: 18px; cursor: pointer; }
.chip-row { display: flex; overflow-x: auto; padding: 10px 16px 4px; gap: 8px; }
.chip { padding: 6px 14px; border-radius: 18px; border: none; min-height: 32px; background: rgba(0, 0, 0, 0.08); color: #555; font-size: 14px; font-weight: 600; white-space: nowrap; cursor: pointer; }
.chip.active { background: #2e7d32; color: #fff; }
.content { padding: 16px 16px 60px; flex: 1; overflow-y: auto; }
.section { margin-bottom: 28px; }
.section-title { font-size: 18px; font-weight: 700; margin: 0 0 12px; color: var(--color-accent); }
.card { background: var(--color-card-bg); padding: 16px; border-radius: 10px; margin-bottom: 12px; }
.card-title { font-size: 15px; font-weight: 600; color: var(--color-text-primary); margin: 0; }
.divider { height: 1px; background: var(--color-divider); margin: 8px 0; }
.item { font-size: 14px; color: var(--color-text-item); margin: 4px 0; }
.link { color: var(--color-accent); font-weight: 600; text-decoration: underline; }
.tabs { display: flex; border-top: 1px solid var(--color-header-border); background: var(--color-header-bg); }
.tab { flex: 1; padding: 12px; text-align: center; border: none; background: transparent; color: var(--color-text-muted); font-weight: 600; cursor: pointer; }
.tab.active { color: var(--color-accent); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #fafafa;
    --color-header-bg: #ffffff;
    --color-header-border: #eeeeee;
    --color-text-primary: #111111;
    --color-text-muted: #666666;
    --color-text-item: #222222;
    --color-accent: #2e7d32;
    --color-card-bg: #ffffff;
    --color-divider: rgba(0, 0, 0, 0.06);
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #181818;
    --color-header-bg: #202020;
    --color-header-border: #2a2a2a;
    --color-text-primary: #ffffff;
    --color-text-muted: #aaaaaa;
    --color-text-item: #eeeeee;
    --color-accent: #81c784;
    --color-card-bg: #252525;
    --color-divider: rgba(255, 255, 255, 0.1);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_icon_offers_the_other_theme() {
        assert_eq!(theme_definition(ThemeMode::Dark).toggle_icon, "☀️");
        assert_eq!(theme_definition(ThemeMode::Light).toggle_icon, "🌙");
    }

    #[test]
    fn test_palettes_differ() {
        assert!(theme_definition(ThemeMode::Light).css.contains("#fafafa"));
        assert!(theme_definition(ThemeMode::Dark).css.contains("#181818"));
    }
}
