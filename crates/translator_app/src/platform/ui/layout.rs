use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{MAX_VISIBLE_ALERTS, NAV_HOW_IT_WORKS, NAV_TRANSLATE};

/// Top-level screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub alerts: Rect,
    pub body: Rect,
    pub help: Rect,
}

pub fn screen(area: Rect, alert_count: usize) -> ScreenAreas {
    let alert_rows = alert_count.min(MAX_VISIBLE_ALERTS) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(alert_rows),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenAreas {
        header: chunks[0],
        alerts: chunks[1],
        body: chunks[2],
        help: chunks[3],
    }
}

/// Navigation buttons, right-aligned on the header's inner row.
pub fn nav_buttons(header: Rect) -> [Rect; 2] {
    let y = header.y + header.height.saturating_sub(2).min(1);
    let how_width = NAV_HOW_IT_WORKS.chars().count() as u16;
    let translate_width = NAV_TRANSLATE.chars().count() as u16;
    let right = header.right().saturating_sub(2);
    let translate_x = right.saturating_sub(translate_width).max(header.x);
    let how_x = translate_x.saturating_sub(how_width + 1).max(header.x);
    [
        Rect::new(how_x, y, how_width, 1).intersection(header),
        Rect::new(translate_x, y, translate_width, 1).intersection(header),
    ]
}

/// Regions of the Translate panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateAreas {
    pub drop_zone: Rect,
    pub source: Rect,
    pub swap: Rect,
    pub target: Rect,
    pub submit: Rect,
    pub progress: Rect,
    pub history: Rect,
}

pub fn translate(body: Rect) -> TranslateAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(body);
    let languages = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(rows[1]);
    let submit = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(rows[2]);
    TranslateAreas {
        drop_zone: rows[0],
        source: languages[0],
        swap: languages[1],
        target: languages[2],
        submit: submit[1],
        progress: rows[3],
        history: rows[4],
    }
}

/// Dropdown box opening below `anchor`, clipped to `bounds`.
pub fn dropdown(anchor: Rect, options: usize, bounds: Rect) -> Rect {
    let height = (options as u16).saturating_add(2);
    let below = anchor.bottom().saturating_sub(1);
    let available = bounds.bottom().saturating_sub(below);
    let y = if available >= height {
        below
    } else {
        bounds.bottom().saturating_sub(height).max(bounds.y)
    };
    Rect::new(anchor.x, y, anchor.width, height).intersection(bounds)
}

/// Popup rectangle using a percentage of the available area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// A single-row button of `label` width centered in `area`.
pub fn centered_button(label: &str, area: Rect) -> Rect {
    let width = (label.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    Rect::new(x, y, width, 1.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_rows_are_capped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(screen(area, 0).alerts.height, 0);
        assert_eq!(screen(area, 5).alerts.height, MAX_VISIBLE_ALERTS as u16);
        assert_eq!(screen(area, 1).help.y, 39);
    }

    #[test]
    fn nav_buttons_sit_inside_header() {
        let header = Rect::new(0, 0, 80, 3);
        let [how, translate] = nav_buttons(header);
        assert_eq!(how.y, 1);
        assert!(how.right() < translate.x);
        assert!(translate.right() <= 78);
    }

    #[test]
    fn dropdown_flips_up_when_short_of_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        let low_anchor = Rect::new(10, 20, 20, 3);
        let menu = dropdown(low_anchor, 14, bounds);
        assert_eq!(menu.bottom(), 24);
        assert_eq!(menu.height, 16);
    }
}
