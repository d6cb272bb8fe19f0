//! サムネイル画像フォルダの索引

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ファイル名 → ローカルパス
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    files: HashMap<String, PathBuf>,
}

impl ImageIndex {
    /// フォルダ直下のファイルを索引する（拡張子は問わない、フォルダがなければ空）
    pub fn scan(folder: &Path) -> Self {
        let mut files = HashMap::new();

        if !folder.is_dir() {
            tracing::debug!(folder = %folder.display(), "image folder not found");
            return Self { files };
        }

        for entry in WalkDir::new(folder)
            .max_depth(1)  // 直下のみ
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name() {
                files.insert(name.to_string_lossy().to_string(), path.to_path_buf());
            }
        }

        Self { files }
    }

    /// `src` 属性の末尾ファイル名で引く
    pub fn resolve(&self, src: &str) -> Option<PathBuf> {
        let file_name = src.rsplit('/').next()?.trim();
        if file_name.is_empty() {
            return None;
        }
        self.files.get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_scan_missing_folder() {
        let index = ImageIndex::scan(Path::new("/nonexistent/plates_files"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_resolve_by_basename() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("trap_red.png")).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let index = ImageIndex::scan(dir.path());
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.resolve("./plates_files/trap_red.png"),
            Some(dir.path().join("trap_red.png"))
        );
        assert!(index.resolve("trap_blue.png").is_none());
        assert!(index.resolve("plates_files/").is_none());
    }

    #[test]
    fn test_any_extension_is_kept() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("bleed.svg")).unwrap();
        File::create(dir.path().join("botch.bmp")).unwrap();

        let index = ImageIndex::scan(dir.path());
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("img/bleed.svg"), Some(dir.path().join("bleed.svg")));
        assert_eq!(index.resolve("botch.bmp"), Some(dir.path().join("botch.bmp")));
    }
}
