use super::*;
use std::collections::BTreeSet;

#[test]
fn lookup_is_total_and_well_formed() {
    for id in ShapeId::ALL {
        let d = lookup(id);
        assert!((0..=8).contains(&d.kind.code()), "{id}");
        assert!(d.params.iter().all(|p| p.is_finite()), "{id}");
        assert!(d.offset.x.is_finite() && d.offset.y.is_finite(), "{id}");
        assert!(d.rotation.is_finite(), "{id}");
    }
}

#[test]
fn rebuilding_the_table_is_bit_identical() {
    for id in ShapeId::ALL {
        let a = lookup(id);
        let b = id.descriptor();
        assert_eq!(a, b);
        assert_eq!(a.rotation.to_bits(), b.rotation.to_bits());
    }
}

#[test]
fn all_lists_each_shape_once() {
    let unique: BTreeSet<_> = ShapeId::ALL.into_iter().collect();
    assert_eq!(unique.len(), ShapeId::ALL.len());
}

#[test]
fn every_kind_is_used_by_some_shape() {
    let kinds: BTreeSet<i32> = ShapeId::ALL.into_iter().map(|id| lookup(id).kind.code()).collect();
    assert_eq!(kinds, (0..=8).collect::<BTreeSet<i32>>());
}

#[test]
fn caret_pair_offsets_are_mirror_images() {
    let l = lookup(ShapeId::CaretLeft);
    let r = lookup(ShapeId::CaretRight);
    assert_eq!(l.kind, r.kind);
    assert_eq!(l.params, r.params);
    assert_eq!(l.offset.x, -r.offset.x);
}

#[test]
fn names_parse_loosely() {
    assert_eq!("caret_right".parse::<ShapeId>().unwrap(), ShapeId::CaretRight);
    assert_eq!("Caret-Right".parse::<ShapeId>().unwrap(), ShapeId::CaretRight);
    assert_eq!(" WMouth ".parse::<ShapeId>().unwrap(), ShapeId::WMouth);
    for id in ShapeId::ALL {
        assert_eq!(id.to_string().parse::<ShapeId>().unwrap(), id);
    }
}

#[test]
fn unknown_name_is_a_validation_error() {
    let err = "banana".parse::<ShapeId>().unwrap_err();
    assert!(matches!(err, FaceError::Validation(_)));
    assert!(err.to_string().contains("banana"));
}

#[test]
fn serde_names_match_display_names() {
    for id in ShapeId::ALL {
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, format!("\"{}\"", id.name()));
    }
}
