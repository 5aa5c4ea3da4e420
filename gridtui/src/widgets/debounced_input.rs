//! A text input that commits its value after a quiet period.
//!
//! The displayed value updates on every keystroke; the owner's `on_change`
//! callback only fires once no further keystroke arrived for the debounce
//! duration. Arming a new timer always cancels the previous one, so
//! intermediate values are never delivered. The timer reads the buffer when
//! it fires rather than capturing a snapshot, which makes an external
//! [`sync_value`](DebouncedInput::sync_value) during a pending commit deliver
//! the post-sync value.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::buffer::Buffer;
use crate::event::Position;
use crate::geometry::Rect;
use crate::style::TextStyle;
use crate::text;
use crate::theme::Theme;
use crate::wakeup::{WakeupHandle, WakeupSender};

/// Quiet period before a commit, unless overridden.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Unique identifier for an input instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

type ChangeFn = Arc<dyn Fn(&str) + Send + Sync>;

struct DebouncedInner {
    /// What is displayed; the source of truth while typing.
    buffer: String,
    /// Cursor position (byte offset).
    cursor: usize,
    placeholder: String,
    /// Last value delivered through `on_change`.
    committed: String,
    on_change: Option<ChangeFn>,
    debounce: Duration,
    /// The pending commit task, if any.
    timer: Option<JoinHandle<()>>,
    /// Bumped whenever the pending timer is cancelled or replaced. A timer
    /// task only commits if its generation still matches, which closes the
    /// race between `abort()` and a task already past its sleep.
    generation: u64,
    /// Screen area from the last render, for click hit-testing.
    area: Option<Rect>,
}

/// Debounced text input widget.
pub struct DebouncedInput {
    id: InputId,
    inner: Arc<RwLock<DebouncedInner>>,
    wakeup: WakeupHandle,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedInput {
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(DebouncedInner {
                buffer: String::new(),
                cursor: 0,
                placeholder: String::new(),
                committed: String::new(),
                on_change: None,
                debounce: DEFAULT_DEBOUNCE,
                timer: None,
                generation: 0,
                area: None,
            })),
            wakeup: WakeupHandle::new(),
        }
    }

    /// Create an input showing `placeholder` while empty.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let input = Self::new();
        if let Ok(mut inner) = input.inner.write() {
            inner.placeholder = placeholder.into();
        }
        input
    }

    /// Create an input with an initial (already committed) value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        if let Ok(mut inner) = input.inner.write() {
            let value = value.into();
            inner.cursor = value.len();
            inner.committed = value.clone();
            inner.buffer = value;
        }
        input
    }

    /// Override the quiet period at construction.
    pub fn with_debounce(self, debounce: Duration) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.debounce = debounce;
        }
        self
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The displayed (buffered) value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.buffer.clone())
            .unwrap_or_default()
    }

    /// The last value delivered through `on_change`.
    pub fn committed_value(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.committed.clone())
            .unwrap_or_default()
    }

    pub fn cursor(&self) -> usize {
        self.inner.read().map(|inner| inner.cursor).unwrap_or(0)
    }

    /// Whether a commit timer is currently armed.
    pub fn is_pending(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.timer.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Replace the change callback. Cancels any pending timer first; if one
    /// was armed, a fresh one is armed so the pending edit still commits,
    /// through the new callback and never the old one.
    pub fn set_on_change(&self, on_change: impl Fn(&str) + Send + Sync + 'static) {
        let was_pending = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            let was_pending = cancel_locked(&mut inner);
            inner.on_change = Some(Arc::new(on_change));
            was_pending
        };
        if was_pending {
            self.arm_timer();
        }
    }

    /// Change the quiet period. Same cancellation rules as
    /// [`set_on_change`](Self::set_on_change).
    pub fn set_debounce(&self, debounce: Duration) {
        let was_pending = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            let was_pending = cancel_locked(&mut inner);
            inner.debounce = debounce;
            was_pending
        };
        if was_pending {
            self.arm_timer();
        }
    }

    /// Install the runtime's wakeup sender so commits trigger a re-render.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
    }

    // -------------------------------------------------------------------------
    // Editing. Every buffer change is visible immediately and (re)arms the
    // commit timer.
    // -------------------------------------------------------------------------

    pub fn insert_char(&self, c: char) {
        {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            let cursor = inner.cursor;
            inner.buffer.insert(cursor, c);
            inner.cursor += c.len_utf8();
        }
        self.wakeup.send();
        self.arm_timer();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&self) {
        let changed = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if inner.cursor == 0 {
                false
            } else {
                let prev = inner.buffer[..inner.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                inner.buffer.remove(prev);
                inner.cursor = prev;
                true
            }
        };
        if changed {
            self.wakeup.send();
            self.arm_timer();
        }
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&self) {
        let changed = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if inner.cursor < inner.buffer.len() {
                let cursor = inner.cursor;
                inner.buffer.remove(cursor);
                true
            } else {
                false
            }
        };
        if changed {
            self.wakeup.send();
            self.arm_timer();
        }
    }

    /// Clear the buffer, as if the user deleted everything.
    pub fn clear(&self) {
        let changed = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if inner.buffer.is_empty() {
                false
            } else {
                inner.buffer.clear();
                inner.cursor = 0;
                true
            }
        };
        if changed {
            self.wakeup.send();
            self.arm_timer();
        }
    }

    pub fn cursor_left(&self) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some((i, _)) = inner.buffer[..inner.cursor].char_indices().last() {
                inner.cursor = i;
            }
        }
        self.wakeup.send();
    }

    pub fn cursor_right(&self) {
        if let Ok(mut inner) = self.inner.write() {
            let next = inner.buffer[inner.cursor..]
                .chars()
                .next()
                .map(|c| inner.cursor + c.len_utf8());
            if let Some(next) = next {
                inner.cursor = next;
            }
        }
        self.wakeup.send();
    }

    pub fn cursor_home(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.cursor = 0;
        }
        self.wakeup.send();
    }

    pub fn cursor_end(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.cursor = inner.buffer.len();
        }
        self.wakeup.send();
    }

    /// Overwrite the buffer with an externally authoritative value.
    ///
    /// The display updates immediately, discarding any in-progress edit. If a
    /// commit was pending, the timer is re-armed so the *synced* value is
    /// what eventually commits; if the input was idle, nothing is scheduled.
    pub fn sync_value(&self, value: impl Into<String>) {
        let was_pending = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            let was_pending = cancel_locked(&mut inner);
            inner.buffer = value.into();
            inner.cursor = inner.buffer.len();
            was_pending
        };
        self.wakeup.send();
        if was_pending {
            self.arm_timer();
        }
    }

    // -------------------------------------------------------------------------
    // Commit timer
    // -------------------------------------------------------------------------

    fn arm_timer(&self) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };

        cancel_locked(&mut inner);
        let expected = inner.generation;
        let debounce = inner.debounce;

        let shared = Arc::clone(&self.inner);
        let wakeup = self.wakeup.clone();
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let (value, callback) = {
                let Ok(mut inner) = shared.write() else {
                    return;
                };
                if inner.generation != expected {
                    // Superseded while we slept; a newer timer owns the commit.
                    return;
                }
                let value = inner.buffer.clone();
                inner.committed = value.clone();
                inner.timer = None;
                (value, inner.on_change.clone())
            };

            // Outside the lock: the callback typically mutates owner state.
            if let Some(callback) = callback {
                callback(&value);
            }
            wakeup.send();
        }));
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Whether a click at `position` lands on the input's last rendered area.
    pub fn hit_test(&self, position: Position) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.area)
            .is_some_and(|area| area.contains(position))
    }

    /// Draw the input as a three-row bordered box.
    pub fn render(&self, buffer: &mut Buffer, area: Rect, theme: &Theme, focused: bool) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let (value, cursor, placeholder) = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            inner.area = Some(area);
            (inner.buffer.clone(), inner.cursor, inner.placeholder.clone())
        };

        let border_color = if focused {
            theme.border_focus
        } else {
            theme.border
        };
        let border = TextStyle::new(border_color, theme.background);
        let inner_width = (area.width - 2) as usize;

        buffer.put_str(
            area.x,
            area.y,
            &format!("┌{}┐", "─".repeat(inner_width)),
            border,
        );
        buffer.put_str(
            area.x,
            area.y + 2,
            &format!("└{}┘", "─".repeat(inner_width)),
            border,
        );

        let content_y = area.y + 1;
        buffer.put_str(area.x, content_y, "│", border);
        buffer.put_str(area.x + area.width - 1, content_y, "│", border);

        let content_x = area.x + 2;
        let content_width = (area.width - 4) as usize;
        if value.is_empty() {
            let style = TextStyle::new(theme.text_muted, theme.background).dim();
            buffer.put_str(
                content_x,
                content_y,
                &text::pad_to_width(&placeholder, content_width),
                style,
            );
        } else {
            let style = TextStyle::new(theme.text, theme.background);
            buffer.put_str(
                content_x,
                content_y,
                &text::pad_to_width(&value, content_width),
                style,
            );
        }

        if focused {
            // Invert the cell under the cursor (the padding space when the
            // cursor sits at the end of the value).
            let offset = text::display_width(&value[..cursor.min(value.len())]);
            if offset < content_width
                && let Some(cell) = buffer.get(content_x + offset as u16, content_y).copied()
            {
                let mut highlighted = cell;
                highlighted.style = TextStyle::new(theme.text, theme.background).inverted();
                buffer.set(content_x + offset as u16, content_y, highlighted);
            }
        }
    }
}

impl Drop for DebouncedInput {
    fn drop(&mut self) {
        // No commit may fire into a defunct widget.
        if let Ok(mut inner) = self.inner.write() {
            cancel_locked(&mut inner);
        }
    }
}

/// Cancel any pending timer under the caller's lock. Returns whether one was
/// armed. Idempotent: cancelling with no timer armed only bumps the
/// generation.
fn cancel_locked(inner: &mut DebouncedInner) -> bool {
    inner.generation = inner.generation.wrapping_add(1);
    match inner.timer.take() {
        Some(timer) => {
            timer.abort();
            true
        }
        None => false,
    }
}
