//! Overlay transformer.

use kitpack_core::{
    Gvkn, Resource, ResourceCollection, TransformError, TransformResult, Transformer,
};
use tracing::debug;

use crate::merge::merge_patch;

/// Merges each patch into the resource carrying the same GVKN, in order.
#[derive(Debug, Clone, Default)]
pub struct OverlayTransformer {
    patches: Vec<(Gvkn, Resource)>,
}

impl OverlayTransformer {
    /// Fails if any patch lacks identity fields.
    pub fn new(patches: Vec<Resource>) -> Result<Self, TransformError> {
        let patches = patches
            .into_iter()
            .map(|patch| -> Result<_, TransformError> { Ok((patch.gvkn()?, patch)) })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patches })
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

impl Transformer for OverlayTransformer {
    fn transform(&self, resources: &mut ResourceCollection) -> TransformResult<()> {
        for (target, patch) in &self.patches {
            let resource = resources
                .get_mut(target)
                .ok_or_else(|| TransformError::NoMatch(target.clone()))?;
            merge_patch(resource.data_mut(), patch.data());
            debug!(target = %target, "Applied patch");
        }
        Ok(())
    }
}
