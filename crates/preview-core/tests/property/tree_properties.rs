use std::collections::BTreeMap;

use preview_core::vfs::TreeBuilder;
use proptest::prelude::*;
use serde_json::{Map, Value};

/// A nested tree of string leaves and object branches.
fn arb_tree() -> impl Strategy<Value = Value> {
    let leaf = "[ -~]{0,16}".prop_map(Value::String);
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::btree_map("[a-z]{1,6}(\\.tf)?", inner, 0..5)
            .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
    })
}

fn arb_root() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,6}(\\.tf)?", arb_tree(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// Expected files and directories, by walking the JSON directly.
fn expected(value: &Value, base: &str, files: &mut BTreeMap<String, String>, dirs: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let path = if base.is_empty() { k.clone() } else { format!("{base}/{k}") };
            match v {
                Value::String(s) => {
                    files.insert(path, s.clone());
                }
                Value::Object(_) => {
                    dirs.push(path.clone());
                    expected(v, &path, files, dirs);
                }
                _ => {}
            }
        }
    }
}

proptest! {
    #[test]
    fn file_paths_match_key_paths(root in arb_root()) {
        let built = TreeBuilder::new(64).build(&root).unwrap();
        let mut files = BTreeMap::new();
        let mut dirs = Vec::new();
        expected(&root, "", &mut files, &mut dirs);

        let actual: BTreeMap<String, String> = built
            .tree
            .files()
            .into_iter()
            .map(|f| (f.path().to_string(), f.contents().to_string()))
            .collect();
        prop_assert_eq!(&actual, &files);
        for dir in &dirs {
            prop_assert!(built.tree.is_dir(dir), "missing dir {}", dir);
        }
        prop_assert!(built.skipped.is_empty());
    }

    #[test]
    fn bad_leaf_only_skips_itself(root in arb_root(), bad in any::<i64>()) {
        let mut with_bad = root.clone();
        if let Value::Object(map) = &mut with_bad {
            map.insert("zz_bad".to_string(), Value::from(bad));
        }
        let clean = TreeBuilder::new(64).build(&root).unwrap();
        let dirty = TreeBuilder::new(64).build(&with_bad).unwrap();

        prop_assert_eq!(dirty.tree.file_count(), clean.tree.file_count());
        prop_assert_eq!(dirty.skipped.len(), 1);
        prop_assert_eq!(dirty.skipped[0].path.as_str(), "zz_bad");
    }
}
