use std::sync::Arc;

use lumen_core::Breakpoint;
use lumen_responsive::{
    props_from_json, resolve, BatchResolver, BreakpointMap, Responsive, ResponsiveProps,
};
use proptest::prelude::*;
use serde_json::json;

fn xs1_md3() -> Responsive<i32> {
    Responsive::from(BreakpointMap::new().xs(1).md(3))
}

#[test]
fn scalars_resolve_to_themselves() {
    for bp in Breakpoint::ALL {
        assert_eq!(resolve(&Responsive::Value(0), bp), Some(&0));
        assert_eq!(resolve(&Responsive::Value(""), bp), Some(&""));
        assert_eq!(resolve(&Responsive::Value(false), bp), Some(&false));
        assert_eq!(resolve(&Responsive::<Option<u8>>::Value(None), bp), Some(&None));
    }
}

#[test]
fn mobile_first_cascade() {
    let value = xs1_md3();
    assert_eq!(resolve(&value, Breakpoint::Xs), Some(&1));
    assert_eq!(resolve(&value, Breakpoint::Sm), Some(&1));
    assert_eq!(resolve(&value, Breakpoint::Md), Some(&3));
    assert_eq!(resolve(&value, Breakpoint::Lg), Some(&3));
    assert_eq!(resolve(&value, Breakpoint::Xl), Some(&3));
}

#[test]
fn falls_back_upward_when_nothing_below() {
    let value = Responsive::from(BreakpointMap::new().lg(5));
    assert_eq!(resolve(&value, Breakpoint::Xs), Some(&5));
    assert_eq!(resolve(&value, Breakpoint::Md), Some(&5));

    let value = Responsive::from(BreakpointMap::new().md("m").xl("x"));
    assert_eq!(resolve(&value, Breakpoint::Sm), Some(&"m"));
}

#[test]
fn empty_mapping_resolves_to_none() {
    let empty: Responsive<i32> = Responsive::Breakpoints(BreakpointMap::new());
    for bp in Breakpoint::ALL {
        assert_eq!(resolve(&empty, bp), None);
    }
    let nulls: Responsive<i32> = serde_json::from_value(json!({"sm": null, "lg": null})).unwrap();
    assert_eq!(resolve(&nulls, Breakpoint::Lg), None);
}

#[test]
fn batch_output_is_referentially_stable() {
    let mut props = ResponsiveProps::new();
    props.insert("gap".to_string(), xs1_md3());
    props.insert("columns".to_string(), Responsive::Value(12));
    let props = Arc::new(props);

    let mut resolver = BatchResolver::new();
    let first = resolver.resolve(&props, Breakpoint::Sm);
    let again = resolver.resolve(&props, Breakpoint::Sm);
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(first["gap"], Some(1));

    let larger = resolver.resolve(&props, Breakpoint::Lg);
    assert!(!Arc::ptr_eq(&first, &larger));
    assert_eq!(larger["gap"], Some(3));
    assert_eq!(larger["columns"], Some(12));

    let mut changed = (*props).clone();
    changed.insert("columns".to_string(), Responsive::Value(6));
    let changed = Arc::new(changed);
    let updated = resolver.resolve(&changed, Breakpoint::Lg);
    assert!(!Arc::ptr_eq(&larger, &updated));
    assert_eq!(updated["columns"], Some(6));
}

#[test]
fn batch_reuses_result_for_equal_props() {
    let build = || {
        let mut props = ResponsiveProps::new();
        props.insert("gap".to_string(), xs1_md3());
        Arc::new(props)
    };
    let mut resolver = BatchResolver::new();
    let first = resolver.resolve(&build(), Breakpoint::Md);
    let second = resolver.resolve(&build(), Breakpoint::Md);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn json_props_resolve() {
    let props = Arc::new(
        props_from_json(json!({
            "gap": {"xs": 0, "md": 2},
            "hidden": false,
            "label": {"lg": "wide"},
            "missing": {}
        }))
        .unwrap(),
    );
    let mut resolver = BatchResolver::new();
    let resolved = resolver.resolve(&props, Breakpoint::Sm);
    assert_eq!(resolved["gap"], Some(json!(0)));
    assert_eq!(resolved["hidden"], Some(json!(false)));
    assert_eq!(resolved["label"], Some(json!("wide")));
    assert_eq!(resolved["missing"], None);
}

fn breakpoint() -> impl Strategy<Value = Breakpoint> {
    (0usize..5).prop_map(|i| Breakpoint::ALL[i])
}

fn mapping() -> impl Strategy<Value = [Option<i32>; 5]> {
    proptest::array::uniform5(proptest::option::of(any::<i32>()))
}

fn to_map(entries: [Option<i32>; 5]) -> BreakpointMap<i32> {
    Breakpoint::ALL
        .into_iter()
        .zip(entries)
        .filter_map(|(bp, v)| v.map(|v| (bp, v)))
        .collect()
}

proptest! {
    #[test]
    fn scalar_identity(v in any::<i64>(), bp in breakpoint()) {
        let value = Responsive::Value(v);
        prop_assert_eq!(resolve(&value, bp), Some(&v));
    }

    #[test]
    fn resolves_iff_any_entry_defined(entries in mapping(), bp in breakpoint()) {
        let value = Responsive::from(to_map(entries));
        let any_defined = entries.iter().any(Option::is_some);
        prop_assert_eq!(resolve(&value, bp).is_some(), any_defined);
    }

    #[test]
    fn entry_at_current_wins(entries in mapping(), bp in breakpoint(), v in any::<i32>()) {
        let value = Responsive::from(to_map(entries).with(bp, v));
        prop_assert_eq!(resolve(&value, bp), Some(&v));
    }

    #[test]
    fn defined_value_persists_until_overridden(entries in mapping(), bp in breakpoint()) {
        let value = Responsive::from(to_map(entries));
        if let (Some(next), Some(current)) = (bp.next(), resolve(&value, bp)) {
            if entries[next.index()].is_none() {
                prop_assert_eq!(resolve(&value, next), Some(current));
            }
        }
    }
}
