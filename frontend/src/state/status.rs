/// What a page body should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Error(String),
    Empty,
    Populated,
}

impl ViewStatus {
    /// Folds a resource's latest value and loading flag together with a failure raised
    /// by one of the page's actions. The action failure wins until it is cleared.
    pub fn of<T>(
        loaded: Option<&Result<T, String>>,
        loading: bool,
        action_error: Option<&str>,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> Self {
        if let Some(message) = action_error {
            return ViewStatus::Error(message.to_string());
        }
        if loading {
            return ViewStatus::Loading;
        }
        match loaded {
            None => ViewStatus::Loading,
            Some(Err(message)) => ViewStatus::Error(message.clone()),
            Some(Ok(data)) if is_empty(data) => ViewStatus::Empty,
            Some(Ok(_)) => ViewStatus::Populated,
        }
    }

    pub fn of_list<T>(
        loaded: Option<&Result<Vec<T>, String>>,
        loading: bool,
        action_error: Option<&str>,
    ) -> Self {
        Self::of(loaded, loading, action_error, |items| items.is_empty())
    }
}
