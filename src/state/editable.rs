// Decides whether keyboard focus sits on something the user is typing into.

/// Input kinds that accept typed text.
const TEXT_INPUT_KINDS: &[&str] = &[
    "color",
    "date",
    "datetime-local",
    "email",
    "month",
    "number",
    "password",
    "search",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

/// Snapshot of the attributes of a focus/event target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// No target, or not an element.
    #[default]
    None,
    ContentEditable,
    Input {
        kind: String,
        read_only: bool,
        disabled: bool,
    },
    TextArea {
        read_only: bool,
        disabled: bool,
    },
    Other,
}

impl FocusTarget {
    pub fn input(kind: &str) -> Self {
        Self::Input { kind: kind.to_string(), read_only: false, disabled: false }
    }
}

pub fn is_editable_surface(target: &FocusTarget) -> bool {
    match target {
        FocusTarget::ContentEditable => true,
        FocusTarget::Input { kind, read_only, disabled } => {
            if *read_only || *disabled {
                return false;
            }
            let kind = kind.trim().to_ascii_lowercase();
            let kind = if kind.is_empty() { "text" } else { kind.as_str() };
            TEXT_INPUT_KINDS.contains(&kind)
        }
        FocusTarget::TextArea { read_only, disabled } => !(*read_only || *disabled),
        FocusTarget::None | FocusTarget::Other => false,
    }
}
