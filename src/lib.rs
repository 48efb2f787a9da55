pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::clipboard::copy_to_clipboard;
pub use crate::core::codec::{generate_export_code, parse_export_data};
pub use crate::core::collections::{deep_clone, move_item, next_id};
pub use crate::core::forms::{get_form_data, set_form_data};
pub use crate::core::generators::{
    generate_character_code, generate_config_code, generate_motif_code, generate_owner_code,
    generate_playlist_code,
};
pub use crate::core::lyrics::format_lyrics;
pub use crate::core::toast::{ToastService, DEFAULT_TOAST_DURATION};
pub use crate::domain::model::{ConfigData, ControlKind, FormControl, Song, Toast, ToastKind};
pub use crate::domain::ports::{ClipboardHost, ConfirmDialog, ToastSurface};
pub use crate::utils::error::{HelperError, Result};
pub use crate::utils::escape::{escape_backtick, escape_html, escape_string};
