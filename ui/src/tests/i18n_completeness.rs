use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{self, LanguageCode};

/// Root (relative to crate) for translation tables.
const I18N_DIR: &str = "i18n";

/// Extract every `load_table("...")` literal from source files under `src/`.
/// Only direct literal arguments are matched; that is the only form the
/// components use.
fn extract_table_names_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "load_table(\"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let name = &rest[..end];
                if !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
                    found.insert(name.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn table_files_on_disk(i18n_root: &Path) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    if let Ok(read_dir) = fs::read_dir(i18n_root) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.insert(stem.to_string());
                }
            }
        }
    }
    names
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Every table a component loads must exist on disk.
    let referenced = extract_table_names_from_source(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "no load_table calls found under src/");

    let on_disk = table_files_on_disk(&i18n_root);
    let missing: Vec<_> = referenced.difference(&on_disk).cloned().collect();
    if !missing.is_empty() {
        panic!(
            "Components load tables with no file in {I18N_DIR}/ ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }

    // 2. What is on disk is what got embedded.
    let embedded: BTreeSet<String> = i18n::embedded_table_names().into_iter().collect();
    assert_eq!(embedded, on_disk, "embedded tables differ from {I18N_DIR}/");

    // 3. Every table covers every language and declares a default it contains.
    for name in &on_disk {
        let raw = i18n::embedded_raw(name).unwrap_or_else(|err| panic!("{err}"));
        let default = raw["default"].as_str().unwrap_or_default();
        assert!(
            default.parse::<LanguageCode>().is_ok(),
            "{name}: default `{default}` is not a site language"
        );
        for code in LanguageCode::ALL {
            assert!(
                raw["languages"].get(code.code()).is_some(),
                "{name}: no `{code}` bundle"
            );
        }
    }

    // 4. Unused tables are only reported.
    let unused: Vec<_> = on_disk.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} table(s) not loaded by any component: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}
