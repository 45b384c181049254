use std::sync::Arc;

use rdp_common::{RdpError, Result};
use tracing::warn;

use crate::fsmeta::FileSystemMetadata;
use crate::input::{InputSource, LeafSource};

/// Computes the total byte size of a step's input-source tree.
///
/// Resolution is all-or-nothing: if any leaf in the tree cannot be sized,
/// the whole tree resolves to `None` and no partial total is ever returned.
#[derive(Clone)]
pub struct SourceSizeResolver {
    fs: Arc<dyn FileSystemMetadata>,
}

impl SourceSizeResolver {
    pub fn new(fs: Arc<dyn FileSystemMetadata>) -> Self {
        Self { fs }
    }

    /// Total bytes behind `source`, or `None` if any leaf failed to resolve.
    ///
    /// Every failed leaf encountered during the walk is reported in one
    /// `warn!` diagnostic; the failure set never changes the return contract.
    pub fn resolve(&self, source: &InputSource) -> Option<u64> {
        let mut failed = Vec::new();
        let total = self.walk(source, &mut failed);
        if failed.is_empty() {
            Some(total)
        } else {
            warn!(
                unresolved = failed.len(),
                sources = %failed.join("; "),
                operator = "SourceSizeResolver",
                "input size unavailable: some sources failed to resolve"
            );
            None
        }
    }

    fn walk(&self, source: &InputSource, failed: &mut Vec<String>) -> u64 {
        match source {
            InputSource::Leaf(leaf) => match self.leaf_bytes(leaf) {
                Ok(bytes) => bytes,
                Err(err) => {
                    failed.push(format!("{}: {err}", leaf.pattern));
                    0
                }
            },
            InputSource::Composite(children) => {
                let mut total = 0_u64;
                for child in children {
                    total = total.saturating_add(self.walk(child, failed));
                }
                total
            }
        }
    }

    fn leaf_bytes(&self, leaf: &LeafSource) -> Result<u64> {
        if !leaf.is_files() {
            return Err(RdpError::Unsupported(format!(
                "source format not glob-addressable: {}",
                leaf.format
            )));
        }
        let mut total = 0_u64;
        for path in self.fs.expand(&leaf.pattern)? {
            total = total.saturating_add(self.fs.content_length(&path)?);
        }
        Ok(total)
    }
}
