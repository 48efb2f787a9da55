use crate::domain::model::Toast;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Host clipboard access. The primary write goes through the asynchronous
/// permission/write path and may be rejected; `fallback_copy` is the
/// hidden-editable-surface technique and is assumed to always succeed.
#[async_trait]
pub trait ClipboardHost: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;

    fn fallback_copy(&self, text: &str);
}

/// Native blocking yes/no dialog. Blocks the calling flow until answered.
pub trait ConfirmDialog: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Display surface for toast notifications. The service guarantees calls
/// arrive in show / begin_fade / remove order per toast id and that at most
/// one toast is shown at a time.
pub trait ToastSurface: Send + Sync {
    fn show(&self, toast: &Toast);

    /// Start the fade/slide-out transition for the given toast.
    fn begin_fade(&self, id: u64);

    /// Remove the toast from display. May be called for an id that is
    /// already gone; surfaces must treat that as a no-op.
    fn remove(&self, id: u64);
}
