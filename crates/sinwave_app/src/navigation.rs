//! Screen navigation
//!
//! The navigator is a registry of screens keyed by tag plus one primary
//! screen. Attaching a tag reuses the registered screen when there is one
//! and creates it otherwise; the previous primary screen is detached.
//! Screens stay registered (and keep their state) while detached.
//!
//! # Example
//!
//! ```
//! use sinwave_app::{AttachOptions, NavigationOutcome, ScreenNavigator, SeekbarScreen};
//! use sinwave_widget::WaveAttributes;
//!
//! let mut nav = ScreenNavigator::new();
//! let outcome = nav.attach(
//!     Some(SeekbarScreen::TAG),
//!     || SeekbarScreen::new(WaveAttributes::default(), 100),
//!     AttachOptions::default(),
//! );
//! assert!(matches!(outcome, NavigationOutcome::Committed { created: true, .. }));
//! assert_eq!(nav.primary_tag(), Some(SeekbarScreen::TAG));
//! ```

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::screen::Screen;

/// Visual transition used when switching screens
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Cross-fade between the screens
    Fade,
    /// Animate the listed elements from the old screen into the new one
    SharedElements(Vec<SharedElement>),
}

/// A view that animates between two screens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedElement {
    /// View on the outgoing screen
    pub view: String,
    /// Transition name of the matching view on the incoming screen
    pub name: String,
}

impl SharedElement {
    pub fn new(view: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            name: name.into(),
        }
    }
}

/// Options for [`ScreenNavigator::attach`]
#[derive(Clone, Debug, Default)]
pub struct AttachOptions {
    /// Record the switch so [`ScreenNavigator::pop_back_stack`] can undo it
    pub add_to_back_stack: bool,
    /// Elements to animate; a fade is used when empty
    pub shared_elements: Vec<SharedElement>,
}

impl AttachOptions {
    /// Record the switch on the back stack
    pub fn with_back_stack(mut self) -> Self {
        self.add_to_back_stack = true;
        self
    }

    /// Animate a shared element
    pub fn shared_element(mut self, element: SharedElement) -> Self {
        self.shared_elements.push(element);
        self
    }

    fn transition(self) -> Transition {
        if self.shared_elements.is_empty() {
            Transition::Fade
        } else {
            Transition::SharedElements(self.shared_elements)
        }
    }
}

/// Result of an attach request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The target became the primary screen
    Committed {
        /// Registry key of the target
        tag: String,
        /// Whether the screen was newly created
        created: bool,
        /// Transition to play
        transition: Transition,
    },
    /// The target already was the primary screen
    Unchanged,
}

struct ScreenEntry<S> {
    screen: S,
    attached: bool,
}

struct BackStackEntry {
    tag: String,
    previous: Option<String>,
}

/// Registry of screens with a single primary screen
pub struct ScreenNavigator<S: Screen> {
    screens: IndexMap<String, ScreenEntry<S>>,
    primary: Option<String>,
    back_stack: Vec<BackStackEntry>,
    next_anonymous: u32,
}

impl<S: Screen> Default for ScreenNavigator<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> ScreenNavigator<S> {
    pub fn new() -> Self {
        Self {
            screens: IndexMap::new(),
            primary: None,
            back_stack: Vec::new(),
            next_anonymous: 0,
        }
    }

    /// Show the screen registered under `tag`, creating it with `make` when
    /// absent
    ///
    /// Without a tag the lookup never matches, so a new screen is registered
    /// under a generated key on every call.
    pub fn attach<F>(
        &mut self,
        tag: Option<&str>,
        make: F,
        options: AttachOptions,
    ) -> NavigationOutcome
    where
        F: FnOnce() -> S,
    {
        let (key, created) = match tag {
            Some(tag) if self.screens.contains_key(tag) => (tag.to_string(), false),
            Some(tag) => (tag.to_string(), true),
            None => {
                self.next_anonymous += 1;
                (format!("anonymous-{}", self.next_anonymous), true)
            }
        };

        if self.primary.as_deref() == Some(key.as_str()) {
            debug!(tag = %key, "screen already primary");
            return NavigationOutcome::Unchanged;
        }

        if created {
            self.screens.insert(
                key.clone(),
                ScreenEntry {
                    screen: make(),
                    attached: false,
                },
            );
        }

        let previous = self.primary.take();
        if let Some(previous) = &previous {
            self.set_attached(previous, false);
        }
        self.set_attached(&key, true);

        if options.add_to_back_stack {
            self.back_stack.push(BackStackEntry {
                tag: key.clone(),
                previous: previous.clone(),
            });
        }

        let transition = options.transition();
        debug!(tag = %key, ?previous, created, ?transition, "attached screen");
        self.primary = Some(key.clone());

        NavigationOutcome::Committed {
            tag: key,
            created,
            transition,
        }
    }

    /// Undo the most recent back-stack switch
    ///
    /// Returns false when the back stack is empty.
    pub fn pop_back_stack(&mut self) -> bool {
        let Some(entry) = self.back_stack.pop() else {
            return false;
        };

        // The primary may differ from the entry's screen after plain attaches
        if let Some(current) = self.primary.take() {
            self.set_attached(&current, false);
        }
        if let Some(previous) = &entry.previous {
            self.set_attached(previous, true);
        }
        debug!(from = %entry.tag, to = ?entry.previous, "popped back stack");
        self.primary = entry.previous;
        true
    }

    /// Tag of the primary screen
    pub fn primary_tag(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// The primary screen
    pub fn primary(&self) -> Option<&S> {
        let tag = self.primary.as_deref()?;
        self.screens.get(tag).map(|entry| &entry.screen)
    }

    /// The primary screen, mutably
    pub fn primary_mut(&mut self) -> Option<&mut S> {
        let tag = self.primary.as_deref()?;
        self.screens.get_mut(tag).map(|entry| &mut entry.screen)
    }

    /// A registered screen, attached or not
    pub fn get(&self, tag: &str) -> Option<&S> {
        self.screens.get(tag).map(|entry| &entry.screen)
    }

    /// Whether the screen under `tag` is attached
    pub fn is_attached(&self, tag: &str) -> bool {
        self.screens.get(tag).is_some_and(|entry| entry.attached)
    }

    /// Number of registered screens
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Depth of the back stack
    pub fn back_stack_depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.screens.keys().map(String::as_str)
    }

    fn set_attached(&mut self, tag: &str, attached: bool) {
        let Some(entry) = self.screens.get_mut(tag) else {
            return;
        };
        if entry.attached == attached {
            return;
        }
        entry.attached = attached;
        if attached {
            entry.screen.on_attach();
        } else {
            entry.screen.on_detach();
        }
    }
}

/// Something that may own a navigator
pub trait NavigationHost<S: Screen> {
    /// The host's navigator, or None when the host cannot navigate
    fn navigator(&mut self) -> Option<&mut ScreenNavigator<S>>;
}

/// Attach a screen through a host, doing nothing when the host has no
/// navigator
pub fn attach_from<S, H, F>(
    host: &mut H,
    tag: Option<&str>,
    make: F,
    options: AttachOptions,
) -> Option<NavigationOutcome>
where
    S: Screen,
    H: NavigationHost<S> + ?Sized,
    F: FnOnce() -> S,
{
    let Some(navigator) = host.navigator() else {
        warn!(?tag, "host cannot navigate; ignoring attach request");
        return None;
    };
    Some(navigator.attach(tag, make, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{SeekbarScreen, ToolbarScreen};
    use sinwave_widget::{SinWave, WaveAttributes};

    /// Screen that counts lifecycle callbacks
    struct CountingScreen {
        tag: String,
        wave: SinWave,
        attaches: u32,
        detaches: u32,
    }

    impl CountingScreen {
        fn new(tag: &str) -> Self {
            Self {
                tag: tag.to_string(),
                wave: SinWave::default(),
                attaches: 0,
                detaches: 0,
            }
        }
    }

    impl Screen for CountingScreen {
        fn tag(&self) -> &str {
            &self.tag
        }

        fn wave(&self) -> &SinWave {
            &self.wave
        }

        fn wave_mut(&mut self) -> &mut SinWave {
            &mut self.wave
        }

        fn on_attach(&mut self) {
            self.attaches += 1;
        }

        fn on_detach(&mut self) {
            self.detaches += 1;
        }
    }

    fn attach(nav: &mut ScreenNavigator<CountingScreen>, tag: &str) -> NavigationOutcome {
        nav.attach(Some(tag), || CountingScreen::new(tag), AttachOptions::default())
    }

    #[test]
    fn test_creates_then_reuses() {
        let mut nav = ScreenNavigator::new();

        let first = attach(&mut nav, "a");
        assert!(matches!(first, NavigationOutcome::Committed { created: true, .. }));

        attach(&mut nav, "b");
        let again = attach(&mut nav, "a");
        assert!(matches!(again, NavigationOutcome::Committed { created: false, .. }));

        assert_eq!(nav.len(), 2);
        assert_eq!(nav.tags().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_detaches_previous_primary() {
        let mut nav = ScreenNavigator::new();
        attach(&mut nav, "a");
        attach(&mut nav, "b");

        assert_eq!(nav.primary_tag(), Some("b"));
        assert!(nav.is_attached("b"));
        assert!(!nav.is_attached("a"));
        assert_eq!(nav.get("a").unwrap().detaches, 1);
    }

    #[test]
    fn test_attaching_primary_is_noop() {
        let mut nav = ScreenNavigator::new();
        attach(&mut nav, "a");

        assert_eq!(attach(&mut nav, "a"), NavigationOutcome::Unchanged);
        assert_eq!(nav.primary().unwrap().attaches, 1);
    }

    #[test]
    fn test_anonymous_screens_always_created() {
        let mut nav = ScreenNavigator::new();
        nav.attach(None, || CountingScreen::new("x"), AttachOptions::default());
        nav.attach(None, || CountingScreen::new("x"), AttachOptions::default());

        assert_eq!(nav.len(), 2);
        assert_eq!(nav.primary_tag(), Some("anonymous-2"));
    }

    #[test]
    fn test_transition_choice() {
        let mut nav = ScreenNavigator::new();
        let fade = attach(&mut nav, "a");
        assert!(matches!(
            fade,
            NavigationOutcome::Committed {
                transition: Transition::Fade,
                ..
            }
        ));

        let shared = nav.attach(
            Some("b"),
            || CountingScreen::new("b"),
            AttachOptions::default().shared_element(SharedElement::new("wave", "hero_wave")),
        );
        match shared {
            NavigationOutcome::Committed {
                transition: Transition::SharedElements(elements),
                ..
            } => assert_eq!(elements, vec![SharedElement::new("wave", "hero_wave")]),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_back_stack() {
        let mut nav = ScreenNavigator::new();
        attach(&mut nav, "a");
        nav.attach(
            Some("b"),
            || CountingScreen::new("b"),
            AttachOptions::default().with_back_stack(),
        );
        assert_eq!(nav.back_stack_depth(), 1);

        assert!(nav.pop_back_stack());
        assert_eq!(nav.primary_tag(), Some("a"));
        assert!(nav.is_attached("a"));
        assert!(!nav.is_attached("b"));

        assert!(!nav.pop_back_stack());
    }

    fn attach_stacked(nav: &mut ScreenNavigator<CountingScreen>, tag: &str) {
        nav.attach(
            Some(tag),
            || CountingScreen::new(tag),
            AttachOptions::default().with_back_stack(),
        );
    }

    fn attached_tags(nav: &ScreenNavigator<CountingScreen>) -> Vec<&str> {
        nav.tags().filter(|tag| nav.is_attached(tag)).collect()
    }

    #[test]
    fn test_pop_detaches_current_primary() {
        let mut nav = ScreenNavigator::new();
        attach(&mut nav, "a");
        attach_stacked(&mut nav, "b");
        attach(&mut nav, "c");

        assert!(nav.pop_back_stack());
        assert_eq!(nav.primary_tag(), Some("a"));
        assert!(nav.is_attached("a"));
        assert!(!nav.is_attached("b"));
        assert!(!nav.is_attached("c"));
        assert_eq!(attached_tags(&nav), vec!["a"]);
        assert_eq!(nav.get("c").unwrap().detaches, 1);
        // b was already detached by the switch to c
        assert_eq!(nav.get("b").unwrap().detaches, 1);
    }

    #[test]
    fn test_pop_after_reattaching_registered_screens() {
        let mut nav = ScreenNavigator::new();
        attach(&mut nav, "a");
        attach_stacked(&mut nav, "b");
        attach(&mut nav, "a");
        attach(&mut nav, "b");
        assert_eq!(attached_tags(&nav), vec!["b"]);

        assert!(nav.pop_back_stack());
        assert_eq!(nav.primary_tag(), Some("a"));
        assert!(nav.is_attached("a"));
        assert!(!nav.is_attached("b"));
        assert_eq!(attached_tags(&nav), vec!["a"]);
        assert_eq!(nav.get("a").unwrap().attaches, 3);
    }

    #[test]
    fn test_pop_to_empty_detaches_everything() {
        let mut nav = ScreenNavigator::new();
        attach_stacked(&mut nav, "a");
        attach(&mut nav, "b");

        assert!(nav.pop_back_stack());
        assert_eq!(nav.primary_tag(), None);
        assert!(attached_tags(&nav).is_empty());
    }

    #[test]
    fn test_demo_screens_keep_state() {
        let mut nav = ScreenNavigator::new();
        nav.attach(
            Some(SeekbarScreen::TAG),
            || crate::DemoScreen::Seekbar(SeekbarScreen::new(WaveAttributes::default(), 100)),
            AttachOptions::default(),
        );
        if let Some(crate::DemoScreen::Seekbar(screen)) = nav.primary_mut() {
            screen.on_progress_changed(30, true);
        }

        nav.attach(
            Some(ToolbarScreen::TAG),
            || {
                crate::DemoScreen::Toolbar(ToolbarScreen::new(
                    WaveAttributes::default(),
                    200.0,
                    56.0,
                ))
            },
            AttachOptions::default(),
        );
        nav.attach(
            Some(SeekbarScreen::TAG),
            || panic!("seekbar screen should be reused"),
            AttachOptions::default(),
        );

        assert_eq!(nav.primary().unwrap().wave().waviness(), 0.3);
    }

    struct Detached;

    impl NavigationHost<CountingScreen> for Detached {
        fn navigator(&mut self) -> Option<&mut ScreenNavigator<CountingScreen>> {
            None
        }
    }

    struct Hosted(ScreenNavigator<CountingScreen>);

    impl NavigationHost<CountingScreen> for Hosted {
        fn navigator(&mut self) -> Option<&mut ScreenNavigator<CountingScreen>> {
            Some(&mut self.0)
        }
    }

    #[test]
    fn test_attach_from_incompatible_host() {
        let outcome = attach_from(
            &mut Detached,
            Some("a"),
            || CountingScreen::new("a"),
            AttachOptions::default(),
        );
        assert!(outcome.is_none());
    }

    #[test]
    fn test_attach_from_host() {
        let mut host = Hosted(ScreenNavigator::new());
        let outcome = attach_from(
            &mut host,
            Some("a"),
            || CountingScreen::new("a"),
            AttachOptions::default(),
        );
        assert!(outcome.is_some());
        assert_eq!(host.0.primary_tag(), Some("a"));
    }
}
