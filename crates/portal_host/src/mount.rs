//! Anchor-acquisition state machines for the host page.
//!
//! The host renders its header asynchronously, so the dock cannot assume its
//! anchors exist at boot. These machines are fed one tick per observed DOM
//! mutation batch and decide, without ever polling, when an anchor has
//! appeared. They are pure: all DOM access goes through [`AnchorProbe`], so
//! the transition logic is testable off-wasm.

/// Live queries against the host page, re-run on every mutation tick.
pub trait AnchorProbe {
    /// Opaque anchor handle; a DOM element in the browser adapter.
    type Anchor;

    /// The fine-grained anchor marker next to which the dock mounts.
    fn find_fine(&self) -> Option<Self::Anchor>;

    /// The coarse container that stabilizes earlier than the fine anchor.
    fn find_coarse(&self) -> Option<Self::Anchor>;

    /// The element the mount container is actually inserted into: the fine
    /// anchor's ancestor-of-ancestor.
    fn mount_parent(&self, fine: &Self::Anchor) -> Option<Self::Anchor>;
}

/// Phase of a [`HeaderWatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    /// Observing the whole document for either anchor.
    WatchingBroadly,
    /// Observation narrowed to the coarse anchor's subtree.
    WatchingNarrowed,
    /// Anchor delivered; the machine is inert.
    Found,
}

/// What the observation driver must do after a mutation tick.
#[derive(Debug, PartialEq, Eq)]
pub enum WatchDirective<A> {
    /// Nothing found yet; keep the current observation running.
    KeepWatching,
    /// Coarse anchor found: re-scope the observation to its subtree.
    Narrow(A),
    /// Fine anchor resolved: stop observing for good and mount here.
    Resolved(A),
}

/// One-shot locator for the primary header anchor.
///
/// `WatchingBroadly → WatchingNarrowed → Found`, where the narrowing step is
/// optional: the fine anchor resolves directly from either watching phase.
/// `Found` is terminal; further ticks are ignored without probing.
#[derive(Debug)]
pub struct HeaderWatch {
    phase: WatchPhase,
}

impl Default for HeaderWatch {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderWatch {
    pub fn new() -> Self {
        Self {
            phase: WatchPhase::WatchingBroadly,
        }
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    pub fn on_mutation<P: AnchorProbe>(&mut self, probe: &P) -> WatchDirective<P::Anchor> {
        match self.phase {
            WatchPhase::Found => WatchDirective::KeepWatching,
            WatchPhase::WatchingBroadly => {
                if let Some(directive) = self.try_resolve(probe) {
                    return directive;
                }
                if let Some(coarse) = probe.find_coarse() {
                    self.phase = WatchPhase::WatchingNarrowed;
                    return WatchDirective::Narrow(coarse);
                }
                WatchDirective::KeepWatching
            }
            WatchPhase::WatchingNarrowed => self
                .try_resolve(probe)
                .unwrap_or(WatchDirective::KeepWatching),
        }
    }

    /// A fine anchor without a resolvable mount parent does not count as
    /// found; the watch keeps running until both exist.
    fn try_resolve<P: AnchorProbe>(&mut self, probe: &P) -> Option<WatchDirective<P::Anchor>> {
        let fine = probe.find_fine()?;
        let parent = probe.mount_parent(&fine)?;
        self.phase = WatchPhase::Found;
        Some(WatchDirective::Resolved(parent))
    }
}

/// One-shot locator for the conditionally-rendered collapsible header region.
///
/// Driven by child-list changes on a stable header row; resolves at most
/// once and ignores every tick after that.
#[derive(Debug, Default)]
pub struct CollapsibleWatch {
    found: bool,
}

impl CollapsibleWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn on_children_changed<A>(
        &mut self,
        find_region: impl FnOnce() -> Option<A>,
    ) -> Option<A> {
        if self.found {
            return None;
        }
        let region = find_region()?;
        self.found = true;
        Some(region)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Probe over plain strings with switchable presence per anchor.
    struct FakeProbe {
        fine: Option<&'static str>,
        coarse: Option<&'static str>,
        parent: Option<&'static str>,
    }

    impl AnchorProbe for FakeProbe {
        type Anchor = &'static str;

        fn find_fine(&self) -> Option<&'static str> {
            self.fine
        }

        fn find_coarse(&self) -> Option<&'static str> {
            self.coarse
        }

        fn mount_parent(&self, _fine: &&'static str) -> Option<&'static str> {
            self.parent
        }
    }

    #[test]
    fn resolves_directly_from_broad_watch() {
        let mut watch = HeaderWatch::new();
        let probe = FakeProbe {
            fine: Some("follow-button"),
            coarse: Some("header"),
            parent: Some("header-actions"),
        };

        assert_eq!(
            watch.on_mutation(&probe),
            WatchDirective::Resolved("header-actions")
        );
        assert_eq!(watch.phase(), WatchPhase::Found);
    }

    #[test]
    fn narrows_then_resolves() {
        let mut watch = HeaderWatch::new();
        let only_coarse = FakeProbe {
            fine: None,
            coarse: Some("header"),
            parent: None,
        };
        assert_eq!(
            watch.on_mutation(&only_coarse),
            WatchDirective::Narrow("header")
        );
        assert_eq!(watch.phase(), WatchPhase::WatchingNarrowed);

        let fine_appeared = FakeProbe {
            fine: Some("follow-button"),
            coarse: Some("header"),
            parent: Some("header-actions"),
        };
        assert_eq!(
            watch.on_mutation(&fine_appeared),
            WatchDirective::Resolved("header-actions")
        );
    }

    #[test]
    fn keeps_watching_while_nothing_is_present() {
        let mut watch = HeaderWatch::new();
        let empty = FakeProbe {
            fine: None,
            coarse: None,
            parent: None,
        };
        for _ in 0..3 {
            assert_eq!(watch.on_mutation(&empty), WatchDirective::KeepWatching);
        }
        assert_eq!(watch.phase(), WatchPhase::WatchingBroadly);
    }

    #[test]
    fn fine_anchor_without_mount_parent_keeps_watching() {
        let mut watch = HeaderWatch::new();
        let detached = FakeProbe {
            fine: Some("follow-button"),
            coarse: None,
            parent: None,
        };
        assert_eq!(watch.on_mutation(&detached), WatchDirective::KeepWatching);
        assert_eq!(watch.phase(), WatchPhase::WatchingBroadly);
    }

    #[test]
    fn found_is_terminal_and_never_probes_again() {
        let mut watch = HeaderWatch::new();
        let resolving = FakeProbe {
            fine: Some("follow-button"),
            coarse: None,
            parent: Some("header-actions"),
        };
        assert_eq!(
            watch.on_mutation(&resolving),
            WatchDirective::Resolved("header-actions")
        );

        assert_eq!(watch.on_mutation(&resolving), WatchDirective::KeepWatching);
        assert_eq!(watch.on_mutation(&resolving), WatchDirective::KeepWatching);
    }

    #[test]
    fn collapsible_watch_fires_exactly_once() {
        let mut watch = CollapsibleWatch::new();

        assert_eq!(watch.on_children_changed(|| None::<&str>), None);
        assert!(!watch.is_found());

        assert_eq!(watch.on_children_changed(|| Some("collapsed")), Some("collapsed"));
        assert!(watch.is_found());

        assert_eq!(watch.on_children_changed(|| Some("collapsed")), None);
    }
}
