// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the lookup and quoting guarantees of the document tree over
//! arbitrary names, values and shapes.

use cdncfg::domain::text::{destringify, stringify};
use cdncfg::domain::{Entry, Scalar, Section};
use proptest::prelude::*;

fn quote_free() -> impl Strategy<Value = String> {
    "[^\"'`]*"
}

fn plain_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

// Test that destringify reaches a fixpoint after one application
proptest! {
    #[test]
    fn test_destringify_idempotent(s in "\\PC*") {
        let once = destringify(&s);
        prop_assert_eq!(destringify(once), once);
    }
}

// Test that stringify then destringify gives back the destringified input
proptest! {
    #[test]
    fn test_stringify_roundtrip(s in "\\PC*") {
        let quoted = stringify(&s);
        prop_assert_eq!(destringify(&quoted), destringify(&s));
    }
}

proptest! {
    #[test]
    fn test_stringify_roundtrip_without_quotes(s in quote_free()) {
        let quoted = stringify(&s);
        prop_assert_eq!(destringify(&quoted), s.as_str());
    }
}

// Test that Scalar keeps any text it is given
proptest! {
    #[test]
    fn test_scalar_from_any_string(s in "\\PC*") {
        let value = Scalar::from(s.clone());
        prop_assert_eq!(value.as_str(), s.as_str());
    }
}

// Test that integers stored as entries read back unchanged
proptest! {
    #[test]
    fn test_get_int_roundtrip(name in plain_name(), n in prop::num::i32::ANY) {
        let root = Section::new("").with_children([Entry::new(name.clone(), n.to_string())]);
        prop_assert_eq!(root.get_int(&name).unwrap(), Some(n));
        prop_assert_eq!(root.get_int_or(&name, n.wrapping_add(1)).unwrap(), n);
    }
}

// Test that names never appended are absent
proptest! {
    #[test]
    fn test_absent_key(
        names in prop::collection::vec(plain_name(), 0..8),
        probe in "[A-Z]{1,6}"
    ) {
        let mut root = Section::new("");
        for name in &names {
            root.append(Entry::new(name.clone(), "v"));
        }
        prop_assert!(root.get(&probe).is_none());
        prop_assert!(!root.has(&probe));
        prop_assert_eq!(root.get_string_or(&probe, "dflt").unwrap(), "dflt");
    }
}

// Test that index access never panics
proptest! {
    #[test]
    fn test_index_access_total(len in 0usize..16, index in any::<usize>()) {
        let mut root = Section::new("");
        for i in 0..len {
            root.append(Entry::new(i.to_string(), "v"));
        }
        prop_assert_eq!(root.get_at(index).is_some(), index < len);
        prop_assert!(root.get_entry_at(index).is_ok());
    }
}

// Test that a direct child named "a.b" wins over the path a -> b
proptest! {
    #[test]
    fn test_whole_key_shadows_path(
        a in plain_name(),
        b in plain_name(),
        x in quote_free(),
        y in quote_free()
    ) {
        let key = format!("{}.{}", a, b);
        let mut root = Section::new("");
        root.append(Section::new(a.clone()).with_children([Entry::new(b.clone(), y)]));
        root.append(Entry::new(key.clone(), x.clone()));
        prop_assert_eq!(root.get_string(&key).unwrap(), Some(x));
    }
}

// Test that lists keep insertion order
proptest! {
    #[test]
    fn test_list_preserves_order(values in prop::collection::vec(quote_free(), 0..12)) {
        let mut array = Section::new_array("items");
        for (index, value) in values.iter().enumerate() {
            array.append(Entry::new(index.to_string(), value.clone()));
        }
        let mut root = Section::new("");
        root.append(array);
        prop_assert_eq!(root.get_list("items").unwrap(), Some(values));
    }
}
