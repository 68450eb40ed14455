/// Keyboard-focusable controls of the Translate panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    DropZone,
    RemoveFile,
    SourceLanguage,
    TargetLanguage,
    Swap,
    Submit,
    History,
}

const ORDER: [Focus; 7] = [
    Focus::DropZone,
    Focus::RemoveFile,
    Focus::SourceLanguage,
    Focus::TargetLanguage,
    Focus::Swap,
    Focus::Submit,
    Focus::History,
];

impl Focus {
    /// Next control in tab order. The remove button is only reachable while a file is shown.
    pub fn cycle(self, forward: bool, has_file: bool) -> Focus {
        let len = ORDER.len();
        let mut idx = ORDER.iter().position(|f| *f == self).unwrap_or(0);
        loop {
            idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
            let candidate = ORDER[idx];
            if candidate != Focus::RemoveFile || has_file {
                return candidate;
            }
        }
    }
}
