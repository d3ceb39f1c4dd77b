use alloc::string::String;
use core::fmt;

/// Lifecycle of a deferred view's code fetch.
///
/// `Failed` is terminal: no retries, no backoff. Recovery policy belongs to
/// the host's error boundary, not this state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<V> {
    NotStarted,
    InFlight,
    Ready(V),
    Failed(String),
}

/// What the host should render for the deferred view this pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState<'a, V> {
    /// The view is toggled off; render nothing.
    Hidden,
    /// The view is wanted but its code has not arrived; render a fallback.
    Placeholder,
    Ready(&'a V),
    Failed(&'a str),
}

/// Deferred loading of a heavy view, with an optional warm-up hint.
///
/// The loader never performs the fetch itself: `set_show`/`warm` return `true`
/// exactly when the host must dispatch one, and the host reports the outcome
/// via [`complete`](Self::complete) or [`fail`](Self::fail). A completed load
/// is cached for the rest of the session, so toggling the view off and back on
/// never fetches twice.
pub struct DeferredLoader<V> {
    show: bool,
    state: LoadState<V>,
    fetches_started: u64,
}

impl<V> Default for DeferredLoader<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DeferredLoader<V> {
    pub fn new() -> Self {
        Self {
            show: false,
            state: LoadState::NotStarted,
            fetches_started: 0,
        }
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn state(&self) -> &LoadState<V> {
        &self.state
    }

    pub fn view(&self) -> Option<&V> {
        match &self.state {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Number of fetches this loader has asked the host to start.
    pub fn fetches_started(&self) -> u64 {
        self.fetches_started
    }

    /// Toggles the view. Returns `true` when the host must start the code
    /// fetch now (first show with nothing fetched or in flight).
    pub fn set_show(&mut self, show: bool) -> bool {
        self.show = show;
        if show { self.begin_fetch_if_needed() } else { false }
    }

    /// Warm-up hint: start fetching while idle, independent of visibility.
    ///
    /// Returns `true` when the host must start the fetch now. Safe to call
    /// repeatedly; only the first call on a cold loader starts anything.
    pub fn warm(&mut self) -> bool {
        self.begin_fetch_if_needed()
    }

    fn begin_fetch_if_needed(&mut self) -> bool {
        match self.state {
            LoadState::NotStarted => {
                self.state = LoadState::InFlight;
                self.fetches_started = self.fetches_started.saturating_add(1);
                ladebug!(fetches = self.fetches_started, "deferred fetch started");
                true
            }
            _ => false,
        }
    }

    /// Resolves the in-flight fetch with the loaded view.
    ///
    /// Completions arriving in any other state are dropped: a `Ready` loader
    /// keeps its first result for the session and `Failed` is terminal.
    pub fn complete(&mut self, view: V) {
        match self.state {
            LoadState::InFlight => self.state = LoadState::Ready(view),
            _ => latrace!("dropping completion in non-in-flight state"),
        }
    }

    /// Fails the in-flight fetch. Terminal for this loader.
    pub fn fail(&mut self, message: impl Into<String>) {
        match self.state {
            LoadState::InFlight => self.state = LoadState::Failed(message.into()),
            _ => latrace!("dropping failure in non-in-flight state"),
        }
    }

    /// What to render this pass.
    pub fn view_state(&self) -> ViewState<'_, V> {
        if !self.show {
            return ViewState::Hidden;
        }
        match &self.state {
            LoadState::Ready(v) => ViewState::Ready(v),
            LoadState::Failed(message) => ViewState::Failed(message),
            LoadState::NotStarted | LoadState::InFlight => ViewState::Placeholder,
        }
    }
}

impl<V> fmt::Debug for DeferredLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            LoadState::NotStarted => "NotStarted",
            LoadState::InFlight => "InFlight",
            LoadState::Ready(_) => "Ready(..)",
            LoadState::Failed(_) => "Failed(..)",
        };
        f.debug_struct("DeferredLoader")
            .field("show", &self.show)
            .field("state", &state)
            .field("fetches_started", &self.fetches_started)
            .finish()
    }
}
