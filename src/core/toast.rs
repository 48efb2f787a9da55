//! Single-slot toast notification service. At most one toast is visible at
//! a time; showing a new one removes the current one immediately. Expiry is
//! fire-and-forget: timers are never cancelled, they just check that they
//! still own the slot before touching the surface.

use crate::domain::model::{Toast, ToastKind};
use crate::domain::ports::ToastSurface;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Fixed fade/slide transition window before a toast is removed.
const FADE_DURATION: Duration = Duration::from_millis(300);

pub struct ToastService<S: ToastSurface + 'static> {
    surface: Arc<S>,
    current: Arc<Mutex<Option<u64>>>,
    next_id: AtomicU64,
}

impl<S: ToastSurface + 'static> ToastService<S> {
    /// Requires an ambient tokio runtime; expiry timers run as spawned
    /// tasks.
    pub fn new(surface: S) -> Self {
        Self {
            surface: Arc::new(surface),
            current: Arc::new(Mutex::new(None)),
            next_id: AtomicU64::new(1),
        }
    }

    /// Shows `message` for `duration`, then fades it out over a fixed 300 ms
    /// and removes it. A currently displayed toast is removed immediately;
    /// its pending timer becomes a no-op.
    pub fn show(&self, message: &str, kind: ToastKind, duration: Duration) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut current = self.current.lock().expect("toast slot lock poisoned");
            if let Some(previous) = current.take() {
                self.surface.remove(previous);
            }
            *current = Some(id);
        }

        let toast = Toast {
            id,
            message: message.to_string(),
            kind,
        };
        tracing::debug!("showing toast {} ({:?})", id, kind);
        self.surface.show(&toast);

        let surface = Arc::clone(&self.surface);
        let current = Arc::clone(&self.current);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            {
                let slot = current.lock().expect("toast slot lock poisoned");
                if *slot != Some(id) {
                    // Replaced in the meantime; the element is already gone.
                    return;
                }
            }
            surface.begin_fade(id);
            tokio::time::sleep(FADE_DURATION).await;
            let mut slot = current.lock().expect("toast slot lock poisoned");
            if *slot == Some(id) {
                surface.remove(id);
                *slot = None;
            }
        });
    }

    /// [`show`](Self::show) with the default 3000 ms display duration.
    pub fn show_default(&self, message: &str, kind: ToastKind) {
        self.show(message, kind, DEFAULT_TOAST_DURATION);
    }

    /// Id of the toast currently occupying the slot, if any.
    pub fn current(&self) -> Option<u64> {
        *self.current.lock().expect("toast slot lock poisoned")
    }
}
