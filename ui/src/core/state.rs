//! Process-wide UI state shared by every component through Dioxus context.

use dioxus::prelude::*;

use crate::core::storage::{self, Preferences};
use crate::i18n::LanguageCode;

/// Shell state: current language, theme and language picker visibility.
///
/// Provided once at the root with [`SiteState::provide`]; components read it
/// with [`use_site_state`]. Signals are `Copy`, so the struct is too.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub lang: Signal<LanguageCode>,
    pub dark_mode: Signal<bool>,
    pub language_modal: Signal<bool>,
}

/// Plain values behind [`SiteState`]'s signals. Every state change is
/// computed here first and then written to the signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSnapshot {
    pub lang: LanguageCode,
    pub dark_mode: bool,
    pub language_modal: bool,
}

impl ShellSnapshot {
    /// A first visit asks for a language.
    pub fn first_visit() -> Self {
        Self {
            lang: LanguageCode::default(),
            dark_mode: false,
            language_modal: true,
        }
    }

    /// State for a component rendered outside any shell.
    pub fn detached() -> Self {
        Self {
            language_modal: false,
            ..Self::first_visit()
        }
    }

    /// Apply stored preferences. A stored language closes the picker; a
    /// stored theme alone leaves it open.
    pub fn restored(self, prefs: Option<Preferences>) -> Self {
        let Some(prefs) = prefs else {
            return self;
        };
        match prefs.language {
            Some(lang) => Self {
                lang,
                dark_mode: prefs.dark_mode,
                language_modal: false,
            },
            None => Self {
                dark_mode: prefs.dark_mode,
                ..self
            },
        }
    }

    pub fn with_language(self, lang: LanguageCode) -> Self {
        Self {
            lang,
            language_modal: false,
            ..self
        }
    }

    pub fn with_dark_mode_toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }
}

impl SiteState {
    /// Create the state for this tree and restore stored preferences after mount.
    pub fn provide() -> Self {
        let initial = ShellSnapshot::first_visit();
        let lang = use_signal(|| initial.lang);
        let dark_mode = use_signal(|| initial.dark_mode);
        let language_modal = use_signal(|| initial.language_modal);

        let state = use_context_provider(|| SiteState {
            lang,
            dark_mode,
            language_modal,
        });

        use_effect(move || state.restore());

        state
    }

    fn local() -> Self {
        let initial = ShellSnapshot::detached();
        SiteState {
            lang: use_signal(|| initial.lang),
            dark_mode: use_signal(|| initial.dark_mode),
            language_modal: use_signal(|| initial.language_modal),
        }
    }

    /// Current values, read without subscribing.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            lang: *self.lang.peek(),
            dark_mode: *self.dark_mode.peek(),
            language_modal: *self.language_modal.peek(),
        }
    }

    // Writes only the signals whose value changed.
    fn apply(mut self, next: ShellSnapshot) {
        let current = self.snapshot();
        if current.lang != next.lang {
            self.lang.set(next.lang);
        }
        if current.dark_mode != next.dark_mode {
            self.dark_mode.set(next.dark_mode);
        }
        if current.language_modal != next.language_modal {
            self.language_modal.set(next.language_modal);
        }
    }

    fn restore(self) {
        match storage::load_preferences() {
            Ok(prefs) => {
                tracing::debug!(?prefs, "restored preferences");
                self.apply(self.snapshot().restored(prefs));
            }
            Err(err) => tracing::warn!(%err, "could not restore preferences"),
        }
    }

    pub fn select_language(self, lang: LanguageCode) {
        self.apply(self.snapshot().with_language(lang));
        tracing::info!(%lang, "language selected");
        persist(remember_language(lang));
    }

    pub fn toggle_dark_mode(self) {
        let next = self.snapshot().with_dark_mode_toggled();
        self.apply(next);
        persist(remember_dark_mode(next.dark_mode));
    }

    pub fn open_language_modal(mut self) {
        self.language_modal.set(true);
    }

    pub fn close_language_modal(mut self) {
        self.language_modal.set(false);
    }
}

// Each update touches only its own field.
fn remember_language(lang: LanguageCode) -> impl FnOnce(&mut Preferences) {
    move |prefs| prefs.language = Some(lang)
}

fn remember_dark_mode(dark_mode: bool) -> impl FnOnce(&mut Preferences) {
    move |prefs| prefs.dark_mode = dark_mode
}

fn persist(apply: impl FnOnce(&mut Preferences)) {
    if let Err(err) = storage::update_preferences(apply) {
        tracing::warn!(%err, "could not store preferences");
    }
}

/// Shared state from context, or a detached local copy when no shell provided one.
pub fn use_site_state() -> SiteState {
    match try_use_context::<SiteState>() {
        Some(state) => state,
        None => {
            use_hook(|| tracing::debug!("no SiteState in context, using local defaults"));
            SiteState::local()
        }
    }
}
