//! Source loading.

use std::sync::Arc;

use crate::error::LoadResult;

/// Resolves a locator (for example a relative path) to raw bytes.
///
/// Implementations must report an unresolvable locator as
/// [`LoadError::NotFound`](crate::LoadError::NotFound) so optional references can be skipped; every other
/// failure is [`LoadError::Io`](crate::LoadError::Io). Calls are blocking.
pub trait Loader: Send + Sync {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>>;
}

impl<L: Loader + ?Sized> Loader for &L {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>> {
        (**self).load(locator)
    }
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>> {
        (**self).load(locator)
    }
}

impl<L: Loader + ?Sized> Loader for Arc<L> {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>> {
        (**self).load(locator)
    }
}
