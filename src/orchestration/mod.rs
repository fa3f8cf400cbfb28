//! Adaptation orchestrator: the stateful façade over the registry,
//! preset table, and transform set.

use std::collections::BTreeMap;

use crate::models::{AdaptConfig, AdaptedComponent, ProfileData};
use crate::registry::{self, presets, Category, VariantTag};
use crate::transforms;

/// Owns one profile payload for the session and caches adapted
/// components per tag. Adaptation is synchronous and total; re-adapting
/// a tag overwrites its cache slot (last writer wins).
pub struct ComponentAdapter {
    profile: ProfileData,
    defaults: AdaptConfig,
    available: Vec<VariantTag>,
    cache: BTreeMap<VariantTag, AdaptedComponent>,
    active_preset: Option<String>,
}

impl ComponentAdapter {
    pub fn new(profile: ProfileData) -> Self {
        Self::with_defaults(profile, AdaptConfig::default())
    }

    /// The profile is immutable for the adapter's lifetime, so the
    /// availability list is computed once here.
    pub fn with_defaults(profile: ProfileData, defaults: AdaptConfig) -> Self {
        debug_assert!(registry::self_check().is_ok());
        let available = registry::available_variants(&profile);
        Self {
            profile,
            defaults,
            available,
            cache: BTreeMap::new(),
            active_preset: None,
        }
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    pub fn defaults(&self) -> &AdaptConfig {
        &self.defaults
    }

    /// Tags usable with the current profile, in registry order.
    pub fn available_variants(&self) -> &[VariantTag] {
        &self.available
    }

    /// Adapts one tag: merges `overrides` over the session defaults, runs
    /// the transform, and overwrites the cache slot for `tag`.
    pub fn adapt(&mut self, tag: VariantTag, overrides: Option<&AdaptConfig>) -> AdaptedComponent {
        let config = match overrides {
            Some(overrides) => self.defaults.merged(overrides),
            None => self.defaults.clone(),
        };
        let props = transforms::apply(tag, &self.profile, &config);
        let adapted = AdaptedComponent {
            tag,
            props,
            metadata: registry::metadata(tag),
        };
        self.cache.insert(tag, adapted.clone());
        adapted
    }

    /// Sequential `adapt` over `tags`. Transforms are total, so there is
    /// no partial-failure case.
    pub fn adapt_many(
        &mut self,
        tags: &[VariantTag],
        overrides: Option<&AdaptConfig>,
    ) -> BTreeMap<VariantTag, AdaptedComponent> {
        tags.iter()
            .map(|tag| (*tag, self.adapt(*tag, overrides)))
            .collect()
    }

    /// Adapts every variant available for the current profile.
    pub fn adapt_all(
        &mut self,
        overrides: Option<&AdaptConfig>,
    ) -> BTreeMap<VariantTag, AdaptedComponent> {
        let tags = self.available.clone();
        self.adapt_many(&tags, overrides)
    }

    /// Resolves a wire name and adapts it; `None` for names outside the
    /// registry, with no cache effect.
    pub fn adapt_named(
        &mut self,
        name: &str,
        overrides: Option<&AdaptConfig>,
    ) -> Option<AdaptedComponent> {
        VariantTag::parse(name).map(|tag| self.adapt(tag, overrides))
    }

    /// Applies a named preset: adapts every available tag whose declared
    /// size and theme support includes the preset's, using the preset's
    /// blanket config with per-component overrides taking precedence.
    /// Unknown names are a no-op returning an empty list.
    pub fn apply_preset(&mut self, name: &str) -> Vec<VariantTag> {
        let Some(preset) = presets::find(name) else {
            return Vec::new();
        };
        let base = preset.base_config();
        let targets: Vec<VariantTag> = self
            .available
            .iter()
            .copied()
            .filter(|tag| {
                let meta = registry::metadata(*tag);
                meta.supported_sizes.contains(&preset.size)
                    && preset
                        .theme
                        .style
                        .map(|style| meta.supported_themes.contains(&style))
                        .unwrap_or(true)
            })
            .collect();
        for tag in &targets {
            let config = match preset.override_for(*tag) {
                Some(overrides) => base.merged(overrides),
                None => base.clone(),
            };
            self.adapt(*tag, Some(&config));
        }
        self.active_preset = Some(preset.name.to_string());
        targets
    }

    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Clears the cache and the active-preset marker. Idempotent.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.active_preset = None;
    }

    pub fn cached(&self, tag: VariantTag) -> Option<&AdaptedComponent> {
        self.cache.get(&tag)
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Cached entries whose registry category matches, in tag order.
    pub fn by_category(&self, category: Category) -> Vec<&AdaptedComponent> {
        self.cache
            .values()
            .filter(|entry| entry.metadata.category == category)
            .collect()
    }

    /// Available tags whose best-for tags contain the query as a
    /// case-insensitive substring.
    pub fn recommend(&self, use_case: &str) -> Vec<VariantTag> {
        let query = use_case.to_lowercase();
        self.available
            .iter()
            .copied()
            .filter(|tag| {
                registry::metadata(*tag)
                    .best_for
                    .iter()
                    .any(|candidate| candidate.to_lowercase().contains(&query))
            })
            .collect()
    }
}
