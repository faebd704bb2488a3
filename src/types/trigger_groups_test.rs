//! Tests for `TriggerGroups`.

use std::collections::HashSet;

use proptest::prelude::*;

use super::trigger_groups::{TriggerGroups, TriggerInsert};
use crate::id::LinkId;

fn ids(names: &[&str]) -> Vec<LinkId> {
  names.iter().map(|n| LinkId::new(*n)).collect()
}

fn sets(tg: &TriggerGroups) -> Vec<HashSet<LinkId>> {
  let mut out: Vec<HashSet<LinkId>> = tg
    .iter()
    .map(|(_, g)| g.iter().cloned().collect())
    .collect();
  out.sort_by_key(|s| {
    let mut v: Vec<LinkId> = s.iter().cloned().collect();
    v.sort();
    (v.len(), v)
  });
  out
}

fn set(names: &[&str]) -> HashSet<LinkId> {
  ids(names).into_iter().collect()
}

fn with_singletons(names: &[&str]) -> TriggerGroups {
  let mut tg = TriggerGroups::new();
  for n in names {
    tg.insert_singleton(LinkId::new(*n));
  }
  tg
}

#[test]
fn singletons_trigger_individually() {
  let tg = with_singletons(&["a", "b"]);
  assert_eq!(tg.len(), 2);
  assert!(tg.is_satisfied_by(&set(&["a"])));
  assert!(tg.is_satisfied_by(&set(&["b"])));
  assert!(!tg.is_satisfied_by(&set(&["c"])));
}

#[test]
fn insert_evicts_dominated_singletons() {
  let mut tg = with_singletons(&["a", "b", "c"]);
  let r = tg.insert_dominant(&ids(&["a", "b"]));
  match r {
    TriggerInsert::Stored { evicted, .. } => assert_eq!(evicted.len(), 2),
    other => panic!("expected Stored, got {other:?}"),
  }
  assert_eq!(sets(&tg), vec![set(&["c"]), set(&["a", "b"])]);
}

#[test]
fn larger_group_evicts_smaller_one() {
  let mut tg = with_singletons(&["a", "b", "c"]);
  tg.insert_dominant(&ids(&["a", "b"]));
  tg.insert_dominant(&ids(&["a", "b", "c"]));
  assert_eq!(sets(&tg), vec![set(&["a", "b", "c"])]);
}

#[test]
fn smaller_group_is_subsumed() {
  let mut tg = with_singletons(&["a", "b", "c"]);
  tg.insert_dominant(&ids(&["a", "b", "c"]));
  let before = tg.clone();
  let r = tg.insert_dominant(&ids(&["a", "b"]));
  assert!(matches!(r, TriggerInsert::Subsumed { .. }));
  assert_eq!(tg, before);
}

#[test]
fn repeated_insert_is_idempotent() {
  let mut tg = with_singletons(&["a", "b"]);
  tg.insert_dominant(&ids(&["a", "b"]));
  let before = tg.clone();
  tg.insert_dominant(&ids(&["a", "b"]));
  tg.insert_dominant(&ids(&["b", "a"]));
  assert_eq!(tg, before);
  assert_eq!(tg.len(), 1);
}

#[test]
fn duplicate_links_collapse_keeping_first_order() {
  let mut tg = with_singletons(&["a", "b"]);
  let r = tg.insert_dominant(&ids(&["b", "a", "b"]));
  let TriggerInsert::Stored { key, .. } = r else {
    panic!("expected Stored");
  };
  assert_eq!(tg.get(&key).unwrap(), ids(&["b", "a"]).as_slice());
}

#[test]
fn overlapping_groups_coexist() {
  let mut tg = with_singletons(&["a", "b", "c"]);
  tg.insert_dominant(&ids(&["a", "b"]));
  tg.insert_dominant(&ids(&["b", "c"]));
  assert_eq!(sets(&tg), vec![set(&["a", "b"]), set(&["b", "c"])]);
  assert!(tg.is_satisfied_by(&set(&["b", "c"])));
  assert!(!tg.is_satisfied_by(&set(&["a", "c"])));
}

#[test]
fn link_ids_are_deduplicated() {
  let mut tg = with_singletons(&["a", "b", "c"]);
  tg.insert_dominant(&ids(&["a", "b"]));
  tg.insert_dominant(&ids(&["b", "c"]));
  let mut links = tg.link_ids();
  links.sort();
  assert_eq!(links, ids(&["a", "b", "c"]));
  assert!(tg.contains_link(&LinkId::new("b")));
  assert!(!tg.contains_link(&LinkId::new("z")));
}

#[test]
fn to_map_is_detached() {
  let tg = with_singletons(&["a"]);
  let mut m = tg.to_map();
  for v in m.values_mut() {
    v.push(LinkId::new("x"));
  }
  assert!(!tg.contains_link(&LinkId::new("x")));
}

proptest! {
  #[test]
  fn stored_groups_form_an_antichain(
    ops in prop::collection::vec(prop::collection::vec(0usize..6, 1..5), 0..20)
  ) {
    let names = ["a", "b", "c", "d", "e", "f"];
    let mut tg = with_singletons(&names);
    for op in ops {
      let links: Vec<LinkId> = op.iter().map(|i| LinkId::new(names[*i])).collect();
      tg.insert_dominant(&links);
    }
    let groups = sets(&tg);
    for (i, g) in groups.iter().enumerate() {
      for (j, h) in groups.iter().enumerate() {
        if i != j {
          prop_assert!(!h.is_subset(g), "{:?} is contained in {:?}", h, g);
        }
      }
    }
  }

  #[test]
  fn inserted_group_is_always_covered(
    ops in prop::collection::vec(prop::collection::vec(0usize..6, 1..5), 1..20)
  ) {
    let names = ["a", "b", "c", "d", "e", "f"];
    let mut tg = with_singletons(&names);
    for op in ops {
      let links: Vec<LinkId> = op.iter().map(|i| LinkId::new(names[*i])).collect();
      let wanted: HashSet<LinkId> = links.iter().cloned().collect();
      tg.insert_dominant(&links);
      prop_assert!(sets(&tg).iter().any(|g| wanted.is_subset(g)));
    }
  }
}

#[test]
fn generated_keys_never_overwrite_stored_groups() {
  let names: Vec<String> = (0..500).map(|i| format!("l{i}")).collect();
  let mut tg = TriggerGroups::new();
  for n in &names {
    tg.insert_singleton(LinkId::new(n.as_str()));
  }
  assert_eq!(tg.len(), names.len());
  assert_eq!(tg.link_ids().len(), names.len());
}
