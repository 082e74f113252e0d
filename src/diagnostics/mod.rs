//! Diagnostics sink for platform failures.
//!
//! An [`ErrorStream`] collects every failure reported while some work is in
//! progress, tagged with the path of nested work names that were active at the
//! time (`"Animator::move_to > set_position"`). It is a plain object: create
//! one per window, per thread or per application and hand it to the
//! components that should report into it.
//!
//! Every reported item is also forwarded to the `log` facade at `warn`
//! level, so a host that only installs a logger still sees failures.

use parking_lot::Mutex;

use crate::error::Error;

/// One reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Platform error code, or 0 for text-only reports.
    pub code: u32,
    pub text: String,
    /// Work path active when the failure was reported.
    pub work: String,
}

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    work_path: Vec<&'static str>,
    /// Number of items already seen by `check`.
    checked: usize,
}

/// Thread-safe collector of failures.
#[derive(Default)]
pub struct ErrorStream {
    inner: Mutex<Inner>,
}

impl ErrorStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a named unit of work. The name is popped when the guard drops.
    pub fn begin(&self, work: &'static str) -> WorkGuard<'_> {
        self.inner.lock().work_path.push(work);
        WorkGuard { stream: self }
    }

    fn end(&self) {
        self.inner.lock().work_path.pop();
    }

    /// Current work path, outermost first.
    pub fn work_path(&self) -> String {
        self.inner.lock().work_path.join(" > ")
    }

    /// Report a platform error code.
    pub fn report(&self, code: u32) {
        self.push(code, format!("platform error code {}", code));
    }

    /// Report a failure described by text only.
    pub fn report_text(&self, text: impl Into<String>) {
        self.push(0, text.into());
    }

    /// Report a crate error, keeping its platform code when it has one.
    pub fn record(&self, err: &Error) {
        self.push(err.code().unwrap_or(0), err.to_string());
    }

    fn push(&self, code: u32, text: String) {
        let mut inner = self.inner.lock();
        let work = inner.work_path.join(" > ");
        log::warn!("[{}] {}", work, text);
        inner.items.push(Item { code, text, work });
    }

    /// True if no failure was reported since the previous `check`.
    pub fn check(&self) -> bool {
        let mut inner = self.inner.lock();
        let clean = inner.checked == inner.items.len();
        inner.checked = inner.items.len();
        clean
    }

    pub fn failed(&self) -> bool {
        !self.inner.lock().items.is_empty()
    }

    pub fn success(&self) -> bool {
        !self.failed()
    }

    /// Text of the most recent failure.
    pub fn last(&self) -> Option<String> {
        self.inner.lock().items.last().map(|item| item.text.clone())
    }

    pub fn items(&self) -> Vec<Item> {
        self.inner.lock().items.clone()
    }

    pub fn remove_last(&self) -> Option<Item> {
        let mut inner = self.inner.lock();
        let item = inner.items.pop();
        inner.checked = inner.checked.min(inner.items.len());
        item
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.items.clear();
        inner.checked = 0;
    }
}

/// Scope of one unit of work in an [`ErrorStream`].
pub struct WorkGuard<'a> {
    stream: &'a ErrorStream,
}

impl Drop for WorkGuard<'_> {
    fn drop(&mut self) {
        self.stream.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stream_is_clean() {
        let stream = ErrorStream::new();
        assert!(stream.success());
        assert!(stream.check());
        assert_eq!(stream.last(), None);
    }

    #[test]
    fn reports_carry_nested_work_path() {
        let stream = ErrorStream::new();
        {
            let _outer = stream.begin("Animator::move_to");
            let _inner = stream.begin("set_position");
            stream.report(5);
        }
        assert_eq!(stream.work_path(), "");
        let items = stream.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, 5);
        assert_eq!(items[0].work, "Animator::move_to > set_position");
    }

    #[test]
    fn check_only_flags_new_failures() {
        let stream = ErrorStream::new();
        stream.report_text("first");
        assert!(!stream.check());
        assert!(stream.check());
        stream.report_text("second");
        assert!(!stream.check());
        assert_eq!(stream.last().as_deref(), Some("second"));
    }

    #[test]
    fn record_keeps_platform_code() {
        let stream = ErrorStream::new();
        stream.record(&Error::Platform {
            operation: "SetWindowPos",
            code: 1400,
        });
        assert_eq!(stream.items()[0].code, 1400);
    }

    #[test]
    fn remove_and_clear() {
        let stream = ErrorStream::new();
        stream.report(1);
        stream.report(2);
        assert_eq!(stream.remove_last().map(|i| i.code), Some(2));
        stream.clear();
        assert!(stream.success());
        assert!(stream.check());
    }
}
