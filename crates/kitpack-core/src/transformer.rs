//! Patch pipeline contract.

use crate::error::TransformResult;
use crate::resource::ResourceCollection;

/// A step of the patch pipeline.
///
/// The transformer holds exclusive access to the collection for the duration
/// of one call and mutates it in place.
pub trait Transformer: Send + Sync {
    fn transform(&self, resources: &mut ResourceCollection) -> TransformResult<()>;
}

impl<T: Transformer + ?Sized> Transformer for Box<T> {
    fn transform(&self, resources: &mut ResourceCollection) -> TransformResult<()> {
        (**self).transform(resources)
    }
}
