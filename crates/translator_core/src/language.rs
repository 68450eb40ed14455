/// Language options offered by the translation form, in display order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("te", "Telugu"),
];

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Label shown in the selector for `code`.
pub fn option_label(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Number of selector options, counting the leading empty "Select language" option.
pub const OPTION_COUNT: usize = LANGUAGES.len() + 1;

/// Selector position of `code`; the empty option is position 0.
pub fn option_index(code: Option<&str>) -> usize {
    code.and_then(|code| LANGUAGES.iter().position(|(c, _)| *c == code))
        .map_or(0, |idx| idx + 1)
}

/// Code at a selector position; position 0 and out-of-range positions are empty.
pub fn option_at(index: usize) -> Option<&'static str> {
    index.checked_sub(1).and_then(|idx| LANGUAGES.get(idx)).map(|(code, _)| *code)
}

/// Short name used in history rows; unknown codes are returned unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "hi" => "Hindi",
        "te" => "Telugu",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "ar" => "Arabic",
        other => other,
    }
}

/// Primary subtag of a locale string (`es-MX`, `pt_BR.UTF-8`) if it names an offered language.
pub fn preferred_language(locale: &str) -> Option<&'static str> {
    let primary = locale
        .split(['-', '_', '.', '@'])
        .next()?
        .trim()
        .to_ascii_lowercase();
    LANGUAGES
        .iter()
        .map(|(code, _)| *code)
        .find(|code| *code == primary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageField {
    Source,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LanguageConflict {
    #[error("Source and target languages cannot be the same.")]
    SameLanguage,
}

/// Source/target selection. Once both are set they differ.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguagePair {
    source: Option<String>,
    target: Option<String>,
}

impl LanguagePair {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn get(&self, field: LanguageField) -> Option<&str> {
        match field {
            LanguageField::Source => self.source(),
            LanguageField::Target => self.target(),
        }
    }

    /// Sets one field. A value equal to the other field is rejected and the
    /// changed field is reset to empty.
    pub fn set(&mut self, field: LanguageField, code: Option<String>) -> Result<(), LanguageConflict> {
        let code = code.filter(|c| !c.is_empty());
        let conflict = match (&code, self.get(other(field))) {
            (Some(new), Some(existing)) => new == existing,
            _ => false,
        };
        let slot = match field {
            LanguageField::Source => &mut self.source,
            LanguageField::Target => &mut self.target,
        };
        if conflict {
            *slot = None;
            return Err(LanguageConflict::SameLanguage);
        }
        *slot = code;
        Ok(())
    }

    /// Exchanges the values when both are set; returns whether anything was swapped.
    pub fn swap(&mut self) -> bool {
        if self.source.is_some() && self.target.is_some() {
            std::mem::swap(&mut self.source, &mut self.target);
            true
        } else {
            false
        }
    }
}

/// An open selector dropdown and its highlighted option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMenu {
    pub field: LanguageField,
    pub highlighted: usize,
}

impl LanguageMenu {
    pub fn open(field: LanguageField, current: Option<&str>) -> Self {
        Self {
            field,
            highlighted: option_index(current),
        }
    }

    pub fn move_highlight(&mut self, forward: bool) {
        self.highlighted = if forward {
            (self.highlighted + 1).min(OPTION_COUNT - 1)
        } else {
            self.highlighted.saturating_sub(1)
        };
    }

    pub fn chosen(&self) -> Option<&'static str> {
        option_at(self.highlighted)
    }
}

fn other(field: LanguageField) -> LanguageField {
    match field {
        LanguageField::Source => LanguageField::Target,
        LanguageField::Target => LanguageField::Source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_primary_subtag_is_matched() {
        assert_eq!(preferred_language("es-MX"), Some("es"));
        assert_eq!(preferred_language("pt_BR.UTF-8"), Some("pt"));
        assert_eq!(preferred_language("DE"), Some("de"));
        assert_eq!(preferred_language("nl-NL"), None);
        assert_eq!(preferred_language("C"), None);
    }

    #[test]
    fn unknown_codes_keep_their_raw_name() {
        assert_eq!(language_name("zh"), "Chinese");
        assert_eq!(language_name("sv"), "sv");
    }

    #[test]
    fn option_positions_start_after_empty_option() {
        assert_eq!(option_index(None), 0);
        assert_eq!(option_index(Some("en")), 1);
        assert_eq!(option_index(Some("te")), LANGUAGES.len());
        assert_eq!(option_index(Some("xx")), 0);
        assert_eq!(option_at(0), None);
        assert_eq!(option_at(1), Some("en"));
        assert_eq!(option_at(OPTION_COUNT), None);
    }
}
