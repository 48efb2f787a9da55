use crate::domain::ports::ClipboardHost;

/// Writes `text` to the host clipboard, degrading to the host's fallback
/// copy technique when the primary write is rejected (permission denied,
/// unsupported environment).
///
/// Always reports `true`: the caller cannot distinguish the two paths or
/// observe a genuine failure. Fire-and-forget by product decision; the
/// fallback path is logged so it at least shows up in diagnostics.
pub async fn copy_to_clipboard(host: &dyn ClipboardHost, text: &str) -> bool {
    match host.write_text(text).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("clipboard write rejected, using fallback: {}", e);
            host.fallback_copy(text);
            true
        }
    }
}
