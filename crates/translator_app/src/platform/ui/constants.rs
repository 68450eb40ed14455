use ratatui::style::Color;

pub const APP_TITLE: &str = " PDF Translator ";
pub const NAV_HOW_IT_WORKS: &str = "[ How It Works ]";
pub const NAV_TRANSLATE: &str = "[ Translate ]";
pub const GET_STARTED: &str = "[ Get Started ]";
pub const REMOVE_FILE: &str = "[ Remove ]";
pub const ALERT_CLOSE: &str = "[x]";
pub const REFRESH_HISTORY: &str = "[ Refresh ]";
pub const CLEAR_HISTORY: &str = "[ Clear ]";
pub const LANGUAGE_PLACEHOLDER: &str = "Select language";
pub const HISTORY_TITLE: &str = " Recent Translations ";

pub const HOW_IT_WORKS_STEPS: [(&str, &str); 4] = [
    ("Upload", "Drop a PDF onto the window or press Ctrl+U to type its path."),
    ("Choose languages", "Pick the language of the document and the one you want."),
    ("Translate", "The server translates the text and rebuilds the PDF."),
    ("Download", "Save the result from the banner or from Recent Translations."),
];

pub const HELP_HOW_IT_WORKS: &str = "Enter: get started  F2: translate  Alt+←/→: back/forward  q: quit";
pub const HELP_TRANSLATE: &str =
    "Tab: focus  Enter: activate  Ctrl+U: open file  r: refresh  C: clear history  d: download link  x: dismiss  Esc: back  q: quit";
pub const HELP_PICKER: &str = "Type or paste a path  Enter: select  Esc: cancel";
pub const HELP_MENU: &str = "↑/↓: choose  Enter: select  Esc: close";
pub const HELP_SERVER_PAGE: &str = "Enter/Esc: close";

pub const MAX_VISIBLE_ALERTS: usize = 3;

pub const ACCENT: Color = Color::Cyan;
pub const POPULATED: Color = Color::Green;
pub const DRAG_OVER: Color = Color::Yellow;
pub const DISABLED: Color = Color::DarkGray;
