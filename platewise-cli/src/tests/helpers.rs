//! Test helpers for writing catalogs and stubbing the completion service.

use camino::{Utf8Path, Utf8PathBuf};
use platewise_core::CompletionProvider;
use platewise_core::test_support::{StubCompletionProvider, banashankari_catalog};
use std::fs;
use tempfile::TempDir;

use crate::recommend::{ProviderBuilder, RecommendConfig};

/// Temporary directory holding catalog files for a single test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the Bangalore fixture catalog and return its path.
    pub(super) fn write_fixture_catalog(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let catalog = banashankari_catalog();
        let payload =
            serde_json::to_string_pretty(catalog.restaurants()).expect("serialize catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Provider builder answering every request with a fixed completion, or
/// building no provider at all.
#[derive(Debug, Default)]
pub(super) struct StubProviderBuilder {
    answer: Option<String>,
}

impl StubProviderBuilder {
    pub(super) fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_owned()),
        }
    }
}

impl ProviderBuilder for StubProviderBuilder {
    fn build(&self, _config: &RecommendConfig) -> Option<Box<dyn CompletionProvider>> {
        self.answer.as_ref().map(|answer| {
            Box::new(StubCompletionProvider::with_text(answer.clone()))
                as Box<dyn CompletionProvider>
        })
    }
}
