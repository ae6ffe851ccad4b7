//! Capability registry: the process-wide cache of supported properties.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::platform::{PlatformProbe, VendorPrefix};
use crate::property::resolver;

/// Cache of style property support for one platform.
///
/// The registry is seeded once from the probe's enumeration of the
/// runtime's default style object and grows monotonically from there:
/// names are only ever added, never removed, and a negative probe is never
/// cached. The vendor prefix is discovered from the first prefixed name
/// seen; later discoveries are no-ops since the prefix is an invariant of
/// the runtime.
///
/// Construct one registry per process (the [`StyleEngine`] does this) and
/// share it. Test isolation comes from constructing a fresh registry with
/// a different probe, or from [`mark_supported`] overrides.
///
/// [`StyleEngine`]: crate::StyleEngine
/// [`mark_supported`]: PlatformRegistry::mark_supported
pub struct PlatformRegistry {
    probe: Box<dyn PlatformProbe>,
    supported: RwLock<HashSet<String>>,
    prefix: RwLock<Option<VendorPrefix>>,
}

impl PlatformRegistry {
    /// Create a registry, seeding the cache from the probe's enumeration.
    pub fn new(probe: impl PlatformProbe + 'static) -> Self {
        let registry = Self {
            probe: Box::new(probe),
            supported: RwLock::new(HashSet::new()),
            prefix: RwLock::new(None),
        };
        for name in registry.probe.enumerate() {
            registry.record(&name);
        }
        tracing::debug!(
            properties = registry.supported.read().len(),
            prefix = registry.prefix_str(),
            "platform capability cache seeded"
        );
        registry
    }

    /// Determine whether `property` is supported on this platform.
    ///
    /// Checks the cache first, then probes the unprefixed and
    /// prefix-qualified forms. The first successful probe is cached;
    /// unsupported names simply return `false` and are not cached.
    pub fn is_supported(&self, property: &str) -> bool {
        let mut candidates = vec![property.to_string()];
        if let Some(prefix) = self.prefix() {
            candidates.push(format!("{prefix}{property}"));
        }

        for candidate in &candidates {
            if self.supported.read().contains(candidate) {
                return true;
            }
            if self.probe.supports(candidate) {
                self.record(candidate);
                tracing::debug!(property = %candidate, "style property probe hit");
                return true;
            }
        }

        false
    }

    /// Check the cache only, without probing.
    pub fn is_known(&self, property: &str) -> bool {
        self.supported.read().contains(property)
    }

    /// Mark a property as supported without probing.
    ///
    /// Caller-level override for embedding quirks and test isolation; the
    /// cache stays monotonic since entries are only added.
    pub fn mark_supported(&self, property: &str) {
        self.record(property);
    }

    /// The discovered vendor prefix, if this platform uses one.
    pub fn prefix(&self) -> Option<VendorPrefix> {
        *self.prefix.read()
    }

    /// The discovered vendor prefix as text, empty when there is none.
    pub fn prefix_str(&self) -> &'static str {
        self.prefix().map(|prefix| prefix.as_str()).unwrap_or("")
    }

    /// Whether assigning `value` to `property` round-trips on the probe.
    pub fn retains_value(&self, property: &str, value: &str) -> bool {
        self.probe.retains_value(property, value)
    }

    /// Cache `name` and capture its vendor prefix if none is set yet.
    fn record(&self, name: &str) {
        self.supported.write().insert(name.to_string());
        if let Some(prefix) = VendorPrefix::of(name) {
            let mut slot = self.prefix.write();
            // First write wins; the prefix is runtime-invariant.
            if slot.is_none() {
                *slot = Some(prefix);
            }
        }
    }
}

/// Style feature support, computed once per engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// CSS transitions are available.
    pub transitions: bool,
    /// CSS transforms are available.
    pub transforms: bool,
    /// 3D transforms are available.
    pub transforms_3d: bool,
}

impl Features {
    /// Probe the registry for feature support.
    ///
    /// Also forces the probed names into the capability cache.
    pub(crate) fn detect(registry: &PlatformRegistry) -> Self {
        let transitions = registry.is_supported("transition");
        let transforms = registry.is_supported("transform");
        let transforms_3d = transforms
            && registry.retains_value(
                &resolver::prefixed(registry, "transform"),
                "translateZ(10px)",
            );
        Self {
            transitions,
            transforms,
            transforms_3d,
        }
    }
}
