use url::Url;

pub const HOW_IT_WORKS_FRAGMENT: &str = "how-it-works";
pub const TRANSLATE_FRAGMENT: &str = "translate";

/// The two mutually exclusive top-level panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    HowItWorks,
    Translate,
}

impl Panel {
    /// `translate` selects Translate; anything else, including no fragment, selects HowItWorks.
    /// A leading `#` is accepted.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        match fragment.map(|f| f.strip_prefix('#').unwrap_or(f)) {
            Some(TRANSLATE_FRAGMENT) => Panel::Translate,
            _ => Panel::HowItWorks,
        }
    }

    pub fn from_location(location: &Url) -> Self {
        Self::from_fragment(location.fragment())
    }

    pub fn fragment(self) -> &'static str {
        match self {
            Panel::HowItWorks => HOW_IT_WORKS_FRAGMENT,
            Panel::Translate => TRANSLATE_FRAGMENT,
        }
    }
}

/// Push-state stack of visited fragments with a back/forward cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl LocationHistory {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            entries: vec![initial.unwrap_or_default().to_string()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Pushes a fragment, discarding any forward entries.
    pub fn push(&mut self, fragment: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len() - 1;
    }

    /// Moves one entry back; returns the landed-on fragment, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationHistory {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_translate_fragment_selects_translate() {
        assert_eq!(Panel::from_fragment(Some("translate")), Panel::Translate);
        assert_eq!(Panel::from_fragment(Some("#translate")), Panel::Translate);
        assert_eq!(Panel::from_fragment(Some("how-it-works")), Panel::HowItWorks);
        assert_eq!(Panel::from_fragment(Some("Translate")), Panel::HowItWorks);
        assert_eq!(Panel::from_fragment(Some("")), Panel::HowItWorks);
        assert_eq!(Panel::from_fragment(None), Panel::HowItWorks);
    }

    #[test]
    fn location_url_fragment_is_used() {
        let url = Url::parse("http://localhost:5000/#translate").unwrap();
        assert_eq!(Panel::from_location(&url), Panel::Translate);
        let url = Url::parse("http://localhost:5000/").unwrap();
        assert_eq!(Panel::from_location(&url), Panel::HowItWorks);
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = LocationHistory::new(None);
        history.push("translate");
        history.push("how-it-works");
        assert_eq!(history.back(), Some("translate"));
        history.push("translate");
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 3);
    }
}
