use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A playlist entry. Absent fields default to empty so partially filled
/// forms still produce a well-formed export block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub lyrics: String,
}

/// App configuration. Every field passes through the generator verbatim; the
/// function-valued `api` block is synthesized on output because it cannot be
/// represented as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigData {
    pub labels: Value,
    pub theme: Value,
    pub features: Value,
    pub player: Value,
    pub defaults: Value,
    pub components: Value,
    pub timing: Value,
    #[serde(rename = "bgMusicSections")]
    pub bg_music_sections: Value,
    #[serde(rename = "keepBgMusicSections")]
    pub keep_bg_music_sections: Value,
}

/// Visual category of a toast, each mapped to a fixed background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// Maps the category names used by callers; anything unrecognized falls
    /// back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "#1e293b",
            ToastKind::Success => "#16a34a",
            ToastKind::Error => "#dc2626",
            ToastKind::Warning => "#d97706",
        }
    }
}

/// A toast as handed to the display surface.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// What kind of form control a value came from. Only `Checkbox` and `Number`
/// change how values are coerced; the rest behave like plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Number,
    Checkbox,
    TextArea,
    Select,
}

/// An input-like control addressed by its `name`. This is the neutral shape
/// the form helpers work on; the host adapts its real controls to and from
/// it.
#[derive(Debug, Clone)]
pub struct FormControl {
    pub name: String,
    pub kind: ControlKind,
    pub value: String,
    pub checked: bool,
}

impl FormControl {
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(name, ControlKind::Text)
        }
    }

    pub fn number(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(name, ControlKind::Number)
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::new(name, ControlKind::Checkbox)
        }
    }
}
