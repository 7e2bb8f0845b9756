//! Theme distribution
//!
//! Views never look a theme up from hidden global state. Instead:
//!
//! - [`ThemeProvider`] owns the active options and the composed theme. Views
//!   receive an `Arc<Theme>` from it explicitly; a mode toggle or option change
//!   recomposes and swaps the shared pointer.
//! - [`ThemeScope`] offers a thread-local, strictly nested scope for code that
//!   renders a subtree under a given theme without threading it through every
//!   call.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::error::ThemeError;
use crate::options::ThemeOptions;
use crate::theme::{create_theme, Theme};
use crate::tokens::PaletteMode;

/// Callback invoked after the provider swaps in a new theme
pub type ThemeListener = Arc<dyn Fn(&Arc<Theme>) + Send + Sync>;

/// Handle returned by [`ThemeProvider::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Options and the theme composed from them, always replaced together
struct ProviderState {
    options: ThemeOptions,
    theme: Arc<Theme>,
}

/// Owns the current theme and rebuilds it on change.
///
/// Updates hold the state lock across read, compose and write, so concurrent
/// `toggle_mode` calls never lose a switch and `options()` always matches
/// `theme()`.
pub struct ThemeProvider {
    state: RwLock<ProviderState>,

    /// Incremented on every swap so consumers can cheaply detect changes
    generation: AtomicU64,

    listeners: Mutex<FxHashMap<ListenerId, ThemeListener>>,
    next_listener: AtomicU64,
}

impl ThemeProvider {
    /// Compose the initial theme from `options`
    pub fn new(options: ThemeOptions) -> Result<Self, ThemeError> {
        let theme = create_theme(&options)?;
        Ok(Self::with_state(options, theme))
    }

    fn with_state(options: ThemeOptions, theme: Theme) -> Self {
        Self {
            state: RwLock::new(ProviderState {
                options,
                theme: Arc::new(theme),
            }),
            generation: AtomicU64::new(0),
            listeners: Mutex::new(FxHashMap::default()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// The current theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner).theme)
    }

    pub fn options(&self) -> ThemeOptions {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .options
            .clone()
    }

    pub fn mode(&self) -> PaletteMode {
        self.theme().mode()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Register a callback run after every theme swap.
    ///
    /// Listeners are called in no particular order.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Arc<Theme>) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Switch palette mode, keeping every other override
    pub fn set_mode(&self, mode: PaletteMode) -> Result<(), ThemeError> {
        self.update(|current| {
            if current.theme.mode() == mode {
                return None;
            }
            tracing::debug!("ThemeProvider::set_mode - switching to {}", mode);
            let mut options = current.options.clone();
            options.set_mode(mode);
            Some(options)
        })
        .map(|_| ())
    }

    /// Toggle between light and dark mode, returning the new mode
    pub fn toggle_mode(&self) -> Result<PaletteMode, ThemeError> {
        let theme = self.update(|current| {
            let mut options = current.options.clone();
            options.set_mode(current.theme.mode().toggle());
            Some(options)
        })?;
        Ok(theme.mode())
    }

    /// Replace all overrides.
    ///
    /// On error the current theme and options are left untouched.
    pub fn set_options(&self, options: ThemeOptions) -> Result<(), ThemeError> {
        self.update(|_| Some(options)).map(|_| ())
    }

    /// Recompose from the options `next` derives from the current state and
    /// swap them in under one write lock. `next` returning `None` leaves the
    /// state alone. Listeners run after the lock is released.
    fn update(
        &self,
        next: impl FnOnce(&ProviderState) -> Option<ThemeOptions>,
    ) -> Result<Arc<Theme>, ThemeError> {
        let theme = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let Some(options) = next(&*state) else {
                return Ok(Arc::clone(&state.theme));
            };
            let theme = Arc::new(create_theme(&options)?);
            *state = ProviderState {
                options,
                theme: Arc::clone(&theme),
            };
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(generation, mode = %theme.mode(), "theme swapped");
            theme
        };

        let listeners: Vec<ThemeListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(&theme);
        }
        Ok(theme)
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::with_state(ThemeOptions::default(), Theme::default())
    }
}

thread_local! {
    static SCOPES: RefCell<Vec<Arc<Theme>>> = const { RefCell::new(Vec::new()) };
}

/// Thread-local scoped theme context
pub struct ThemeScope;

/// Pops the scope pushed by [`ThemeScope::provide`], even on unwind
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

impl ThemeScope {
    /// Run `f` with `theme` as the innermost scoped theme
    pub fn provide<R>(theme: Arc<Theme>, f: impl FnOnce() -> R) -> R {
        SCOPES.with(|scopes| scopes.borrow_mut().push(theme));
        let _guard = ScopeGuard;
        f()
    }

    /// Innermost scoped theme on this thread
    pub fn current() -> Option<Arc<Theme>> {
        SCOPES.with(|scopes| scopes.borrow().last().cloned())
    }

    /// Innermost scoped theme, or the default light theme outside any scope
    pub fn current_or_default() -> Arc<Theme> {
        Self::current().unwrap_or_else(|| Arc::new(Theme::default()))
    }

    /// Nesting depth on this thread
    pub fn depth() -> usize {
        SCOPES.with(|scopes| scopes.borrow().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{PaletteColorOptions, PaletteOptions};
    use lumen_core::Color;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn toggle_swaps_theme_and_keeps_overrides() {
        let options = ThemeOptions {
            shape: Some(crate::tokens::ShapeOptions {
                border_radius: Some(12.0),
            }),
            ..Default::default()
        };
        let provider = ThemeProvider::new(options).unwrap();
        let before = provider.theme();

        assert_eq!(provider.toggle_mode().unwrap(), PaletteMode::Dark);
        let after = provider.theme();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.mode(), PaletteMode::Light);
        assert_eq!(after.mode(), PaletteMode::Dark);
        assert_eq!(after.shape.border_radius, 12.0);
        assert_eq!(provider.generation(), 1);
    }

    #[test]
    fn setting_same_mode_is_a_no_op() {
        let provider = ThemeProvider::default();
        let before = provider.theme();
        provider.set_mode(PaletteMode::Light).unwrap();
        assert!(Arc::ptr_eq(&before, &provider.theme()));
        assert_eq!(provider.generation(), 0);
    }

    #[test]
    fn failed_update_keeps_current_theme() {
        let provider = ThemeProvider::default();
        let before = provider.theme();
        let bad = ThemeOptions {
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions {
                    light: Some(Color::WHITE),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(provider.set_options(bad).is_err());
        assert!(Arc::ptr_eq(&before, &provider.theme()));
        assert_eq!(provider.options(), ThemeOptions::default());
    }

    #[test]
    fn listeners_see_new_theme() {
        let provider = ThemeProvider::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = provider.subscribe(move |theme| {
            assert_eq!(theme.mode(), PaletteMode::Dark);
            seen.fetch_add(1, Ordering::SeqCst);
        });
        provider.set_mode(PaletteMode::Dark).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(provider.unsubscribe(id));
        assert!(!provider.unsubscribe(id));
        provider.set_mode(PaletteMode::Light).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_toggles_are_not_lost() {
        for _ in 0..200 {
            let provider = Arc::new(ThemeProvider::default());
            let barrier = Arc::new(Barrier::new(2));
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let provider = Arc::clone(&provider);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        provider.toggle_mode().unwrap()
                    })
                })
                .collect();
            let mut modes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            modes.sort_by_key(|mode| mode.is_dark());

            assert_eq!(modes, vec![PaletteMode::Light, PaletteMode::Dark]);
            assert_eq!(provider.mode(), PaletteMode::Light);
            assert_eq!(provider.options().mode(), PaletteMode::Light);
            assert_eq!(provider.generation(), 2);
        }
    }

    #[test]
    fn options_always_match_theme_after_concurrent_updates() {
        let provider = Arc::new(ThemeProvider::default());
        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = [4.0f32, 16.0]
            .into_iter()
            .map(|radius| {
                let provider = Arc::clone(&provider);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let options = ThemeOptions {
                        shape: Some(crate::tokens::ShapeOptions {
                            border_radius: Some(radius),
                        }),
                        ..Default::default()
                    };
                    provider.set_options(options).unwrap();
                    provider.set_mode(PaletteMode::Dark).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let theme = provider.theme();
        let options = provider.options();
        assert_eq!(*theme, create_theme(&options).unwrap());
    }

    #[test]
    fn scopes_nest_and_restore() {
        assert!(ThemeScope::current().is_none());
        let light = Arc::new(Theme::light());
        let dark = Arc::new(Theme::dark());

        ThemeScope::provide(Arc::clone(&light), || {
            assert_eq!(ThemeScope::current().unwrap().mode(), PaletteMode::Light);
            ThemeScope::provide(Arc::clone(&dark), || {
                assert_eq!(ThemeScope::current().unwrap().mode(), PaletteMode::Dark);
                assert_eq!(ThemeScope::depth(), 2);
            });
            assert_eq!(ThemeScope::current().unwrap().mode(), PaletteMode::Light);
        });

        assert_eq!(ThemeScope::depth(), 0);
        assert_eq!(ThemeScope::current_or_default().mode(), PaletteMode::Light);
    }
}
