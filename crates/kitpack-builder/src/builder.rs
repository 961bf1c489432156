//! Kit builder - resolves bases depth-first and aggregates their resources.

use kitpack_codec::{Codec, CodecResult, Document};
use kitpack_core::{
    CollectionError, Gvkn, Kit, KitBase, KitPatchset, LoadError, Loader, PackagingObject, Resource,
    ResourceCollection, TransformError, Transformer,
};
use kitpack_transform::{MultiTransformer, OverlayTransformer};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{BuilderConfig, PatchsetPolicy};
use crate::error::{BuildError, BuildResult, ROOT_LOCATOR};

/// A resource and the locator of the Kit that declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedResource {
    pub origin: String,
    pub resource: Resource,
}

/// Resources and patches gathered by the recursive walk, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub resources: Vec<CollectedResource>,
    pub patches: Vec<Resource>,
}

impl Expansion {
    /// Insert every resource into a collection, failing on the first duplicate GVKN.
    pub fn aggregate(self) -> BuildResult<(ResourceCollection, Vec<Resource>)> {
        let mut collection = ResourceCollection::new();
        let mut origins: HashMap<Gvkn, String> = HashMap::new();

        for CollectedResource { origin, resource } in self.resources {
            match collection.insert(resource) {
                Ok(key) => {
                    origins.insert(key, origin);
                }
                Err(CollectionError::Duplicate(gvkn)) => {
                    let existing = origins.remove(&gvkn).unwrap_or_default();
                    return Err(BuildError::Conflict {
                        gvkn,
                        existing,
                        duplicate: origin,
                    });
                }
                Err(CollectionError::Identity(source)) => {
                    return Err(BuildError::InvalidResource {
                        locator: origin,
                        source,
                    });
                }
            }
        }

        Ok((collection, self.patches))
    }
}

/// Expands Kits into patched resource collections.
///
/// A builder holds no per-expansion state; every call walks with its own
/// accumulator, so one builder can serve any number of expansions.
pub struct Builder {
    codec: Codec,
    loader: Arc<dyn Loader>,
    config: BuilderConfig,
}

impl Builder {
    pub fn new(loader: Arc<dyn Loader>) -> Self {
        Self::with_config(loader, BuilderConfig::default())
    }

    pub fn with_config(loader: Arc<dyn Loader>, config: BuilderConfig) -> Self {
        Self {
            codec: Codec::default(),
            loader,
            config,
        }
    }

    /// Replace the codec, e.g. to decode with a different kind registry.
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    /// Expand a Kit through the default pipeline.
    pub fn expand(&self, kit: &Kit) -> BuildResult<ResourceCollection> {
        self.expand_with(kit, default_pipeline)
    }

    /// Expand a Kit, building the pipeline from the collected patch list.
    ///
    /// `pipeline` receives every patch in source order and returns the
    /// transformer that is run once over the aggregated collection.
    pub fn expand_with<F, T>(&self, kit: &Kit, pipeline: F) -> BuildResult<ResourceCollection>
    where
        F: FnOnce(Vec<Resource>) -> Result<T, TransformError>,
        T: Transformer,
    {
        let expansion = self.collect(kit)?;
        finish(expansion, pipeline)
    }

    /// Load the Kit at `source` and expand it through the default pipeline.
    pub fn expand_source(&self, source: &str) -> BuildResult<ResourceCollection> {
        let locator = self.config.locator_for(source);
        let data = self
            .loader
            .load(&locator)
            .map_err(|err| BuildError::load(ROOT_LOCATOR, err))?;
        let kit = self.decode_as(ROOT_LOCATOR, &locator, &data, Document::into_kit)?;

        let mut expansion = Expansion::default();
        let mut resolving = vec![locator.clone()];
        self.collect_into(&kit, &locator, &mut resolving, &mut expansion)?;
        finish(expansion, default_pipeline)
    }

    /// Walk a Kit without aggregating or patching.
    pub fn collect(&self, kit: &Kit) -> BuildResult<Expansion> {
        let mut expansion = Expansion::default();
        let mut resolving = Vec::new();
        self.collect_into(kit, ROOT_LOCATOR, &mut resolving, &mut expansion)?;
        Ok(expansion)
    }

    /// Bases first, each fully before the next; then objects; then patchsets.
    ///
    /// `resolving` holds the locators of the Kits on the current path.
    fn collect_into(
        &self,
        kit: &Kit,
        origin: &str,
        resolving: &mut Vec<String>,
        expansion: &mut Expansion,
    ) -> BuildResult<()> {
        for base in &kit.spec.bases {
            let locator = self.config.locator_for(&base.source);
            if let Some(start) = resolving.iter().position(|l| *l == locator) {
                let mut chain = resolving[start..].to_vec();
                chain.push(locator);
                return Err(BuildError::Cycle(chain.join(" -> ")));
            }

            let Some(base_kit) = self.load_base(origin, base, &locator)? else {
                continue;
            };

            resolving.push(locator.clone());
            let result = self.collect_into(&base_kit, &locator, resolving, expansion);
            resolving.pop();
            result?;
        }

        expansion
            .resources
            .extend(kit.spec.objects.iter().map(|object| CollectedResource {
                origin: origin.to_string(),
                resource: object.clone(),
            }));

        for (index, entry) in kit.spec.patchsets.iter().enumerate() {
            self.collect_patchset(origin, index, entry, expansion)?;
        }

        Ok(())
    }

    fn load_base(&self, origin: &str, base: &KitBase, locator: &str) -> BuildResult<Option<Kit>> {
        debug!(referrer = origin, base = locator, "Loading base");
        match self.loader.load(locator) {
            Ok(data) => self
                .decode_as(origin, locator, &data, Document::into_kit)
                .map(Some),
            Err(LoadError::NotFound { .. }) if base.optional => {
                warn!(referrer = origin, base = locator, "Optional base not found, skipping");
                Ok(None)
            }
            Err(err) => Err(BuildError::load(origin, err)),
        }
    }

    fn collect_patchset(
        &self,
        origin: &str,
        index: usize,
        entry: &KitPatchset,
        expansion: &mut Expansion,
    ) -> BuildResult<()> {
        let source = entry.source();
        match (&entry.patch, source) {
            (None, None) => {
                debug!(referrer = origin, index, "Empty patchset entry");
                return Ok(());
            }
            (Some(_), Some(_)) if self.config.patchset_policy == PatchsetPolicy::Exclusive => {
                return Err(BuildError::AmbiguousPatchset {
                    locator: origin.to_string(),
                    index,
                });
            }
            _ => {}
        }

        if let Some(patch) = &entry.patch {
            expansion.patches.push(patch.clone());
        }

        if let Some(source) = source {
            let locator = self.config.locator_for(source);
            debug!(referrer = origin, patchset = %locator, "Loading patchset");
            let data = self
                .loader
                .load(&locator)
                .map_err(|err| BuildError::load(origin, err))?;
            let patchset = self.decode_as(origin, &locator, &data, Document::into_patchset)?;
            expansion.patches.extend(patchset.patches().cloned());
        }

        Ok(())
    }

    fn decode_as<T: PackagingObject>(
        &self,
        origin: &str,
        locator: &str,
        data: &[u8],
        extract: fn(Document) -> CodecResult<T>,
    ) -> BuildResult<T> {
        let decode_error = |source| BuildError::Decode {
            referrer: origin.to_string(),
            locator: locator.to_string(),
            source,
        };

        let (document, gvk) = self.codec.decode(data).map_err(decode_error)?;
        if gvk.kind != T::KIND {
            return Err(BuildError::KindMismatch {
                referrer: origin.to_string(),
                locator: locator.to_string(),
                expected: T::KIND,
                found: gvk.kind,
            });
        }
        extract(document).map_err(decode_error)
    }
}

/// The standard pipeline: a single overlay seeded with the collected patches.
pub fn default_pipeline(patches: Vec<Resource>) -> Result<MultiTransformer, TransformError> {
    let mut chain = MultiTransformer::default();
    chain.push(OverlayTransformer::new(patches)?);
    Ok(chain)
}

fn finish<F, T>(expansion: Expansion, pipeline: F) -> BuildResult<ResourceCollection>
where
    F: FnOnce(Vec<Resource>) -> Result<T, TransformError>,
    T: Transformer,
{
    let (mut resources, patches) = expansion.aggregate()?;
    info!(
        resources = resources.len(),
        patches = patches.len(),
        "Aggregated kit"
    );

    let transformer = pipeline(patches)?;
    transformer.transform(&mut resources)?;
    Ok(resources)
}
