pub mod clipboard;
pub mod codec;
pub mod collections;
pub mod forms;
pub mod generators;
pub mod literal;
pub mod lyrics;
pub mod toast;

pub use crate::domain::model::{ConfigData, ControlKind, FormControl, Song, Toast, ToastKind};
pub use crate::domain::ports::{ClipboardHost, ConfirmDialog, ToastSurface};
pub use crate::utils::error::Result;
