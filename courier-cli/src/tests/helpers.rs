//! Map files written into a temporary workspace for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::test_support::sample_graph_in_pixels;
use tempfile::TempDir;

#[derive(Debug)]
pub(super) struct MapFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    sample: Utf8PathBuf,
}

impl MapFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let sample = root.join("downtown.json");
        courier_data::save_graph(&sample, &sample_graph_in_pixels()).expect("write sample map");
        Self {
            _dir: dir,
            root,
            sample,
        }
    }

    /// The nine-intersection sample map.
    pub(super) fn sample(&self) -> &Utf8Path {
        &self.sample
    }

    /// A location inside the workspace with no file behind it.
    pub(super) fn missing(&self) -> Utf8PathBuf {
        self.root.join("missing.json")
    }

    /// Write raw contents to a file in the workspace.
    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write workspace file");
        path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}
