//! Ordered transformer chain.

use kitpack_core::{ResourceCollection, TransformResult, Transformer};

/// Runs transformers in order, stopping at the first failure.
#[derive(Default)]
pub struct MultiTransformer {
    transformers: Vec<Box<dyn Transformer>>,
}

impl MultiTransformer {
    pub fn new(transformers: Vec<Box<dyn Transformer>>) -> Self {
        Self { transformers }
    }

    pub fn push(&mut self, transformer: impl Transformer + 'static) {
        self.transformers.push(Box::new(transformer));
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Transformer for MultiTransformer {
    fn transform(&self, resources: &mut ResourceCollection) -> TransformResult<()> {
        for transformer in &self.transformers {
            transformer.transform(resources)?;
        }
        Ok(())
    }
}
