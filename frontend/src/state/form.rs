/// Draft, visibility and inline error for one create-record modal. Whether a submit
/// is in flight is the owning action's `pending()` signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub open: bool,
    pub error: Option<String>,
}

impl<D> FormState<D> {
    pub fn with_draft(draft: D) -> Self {
        Self {
            draft,
            open: false,
            error: None,
        }
    }

    /// Opens the modal keeping whatever the user typed last time.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Opens the modal with a fresh draft and no leftover error.
    pub fn open_fresh(&mut self, draft: D) {
        self.draft = draft;
        self.error = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Closes the modal after a successful submit, leaving `reset` as the next draft.
    pub fn finish(&mut self, reset: D) {
        self.draft = reset;
        self.open = false;
        self.error = None;
    }
}
