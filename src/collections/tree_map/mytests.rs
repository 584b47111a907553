use super::*;
use crate::collections::MapErrorKind;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const REP: usize = if cfg!(miri) { 2 } else { 100 };
const N: usize = if cfg!(miri) { 100 } else { 100000 };
const CHAIN: usize = if cfg!(miri) { 50 } else { 10000 };

fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut keys: Vec<usize> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

#[test]
fn exp_scenario_balanced_test() {
    let mut map = TreeMap::new();
    assert_eq!(map.insert("b", 2), Ok(None));
    assert_eq!(map.insert("a", 1), Ok(None));
    assert_eq!(map.insert("c", 3), Ok(None));
    map.check();
    assert_eq!(map.key_set(), [&"a", &"b", &"c"]);
    assert_eq!(map.get(&"a"), Ok(Some(&1)));
    assert_eq!(map.height(), 2);
    assert_eq!(map.len(), 3);
}

#[test]
fn exp_scenario_ascending_test() {
    let mut map = TreeMap::new();
    map.insert("a", 1).unwrap();
    map.insert("b", 2).unwrap();
    map.insert("c", 3).unwrap();
    map.check();
    assert_eq!(map.height(), 3);
    assert_eq!(map.key_set(), [&"a", &"b", &"c"]);
    let root = map.root.as_ref().unwrap();
    assert!(root.left.is_none());
    assert_eq!(root.right.as_ref().unwrap().key, "b");
}

#[test]
fn exp_overwrite_test() {
    let mut map = TreeMap::new();
    assert_eq!(map.insert("x", 1), Ok(None));
    assert_eq!(map.insert("x", 2), Ok(Some(1)));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&"x"), Ok(Some(&2)));
    assert_eq!(map.height(), 1);
}

#[test]
fn exp_clear_test() {
    let mut map = TreeMap::new();
    for (i, k) in ["d", "b", "a", "c", "e"].into_iter().enumerate() {
        map.insert(k, i).unwrap();
    }
    assert_eq!(map.len(), 5);
    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    for k in ["d", "b", "a", "c", "e"] {
        assert_eq!(map.get(&k), Ok(None));
        assert_eq!(map.contains_key(&k), Ok(false));
    }
    map.insert("z", 26).unwrap();
    assert_eq!(map.len(), 1);
    map.check();
}

#[test]
fn exp_empty_test() {
    let map: TreeMap<u32, u32> = TreeMap::default();
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    assert_eq!(map.get(&7), Ok(None));
    assert!(map.key_set().is_empty());
    assert!(map.values().is_empty());
    assert!(!map.contains_value(&0));
    assert_eq!(map.iter().next(), None);
}

#[test]
fn exp_remove_unsupported_test() {
    let mut map = TreeMap::new();
    let err = map.remove(&1).unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::Unsupported("remove"));
    map.insert(1, "one").unwrap();
    assert!(map.remove(&1).is_err());
    assert_eq!(map.get(&1), Ok(Some(&"one")));
    assert_eq!(map.len(), 1);
}

#[test]
fn exp_values_dedup_test() {
    let mut map = TreeMap::new();
    map.insert("a", 7).unwrap();
    map.insert("b", 7).unwrap();
    map.insert("c", 8).unwrap();
    let values = map.values();
    assert_eq!(values.len(), 2);
    assert!(values.contains(&7));
    assert!(values.contains(&8));
}

#[test]
fn exp_contains_value_test() {
    let mut map = TreeMap::new();
    map.insert(5, Some("five")).unwrap();
    map.insert(3, None).unwrap();
    map.insert(8, Some("eight")).unwrap();
    assert!(map.contains_value(&Some("eight")));
    assert!(map.contains_value(&None));
    assert!(!map.contains_value(&Some("three")));

    let mut map = TreeMap::new();
    map.insert(1, Some(1)).unwrap();
    assert!(!map.contains_value(&None));
}

#[test]
fn exp_put_all_test() {
    let mut map = TreeMap::new();
    map.put_all([(2, "b"), (1, "a"), (2, "B")]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&2), Ok(Some(&"B")));
    map.check();
}

#[test]
fn exp_incomparable_test() {
    let mut map = TreeMap::with_comparator(Partial);
    assert_eq!(
        map.insert(f64::NAN, "nan").unwrap_err().kind(),
        MapErrorKind::Incomparable
    );
    assert!(map.is_empty());

    map.insert(1.0, "one").unwrap();
    map.insert(-2.5, "minus").unwrap();
    let err = map.insert(f64::NAN, "nan").unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::Incomparable);
    assert_eq!(map.len(), 2);
    assert_eq!(map.height(), 2);
    assert_eq!(map.get(&f64::NAN).unwrap_err(), err);
    assert!(map.contains_key(&f64::NAN).is_err());
    assert_eq!(map.get(&-2.5), Ok(Some(&"minus")));

    let err = map.put_all([(3.0, "three"), (f64::NAN, "nan"), (4.0, "four")]);
    assert!(err.is_err());
    assert_eq!(map.key_set(), [&-2.5, &1.0, &3.0]);
    map.check();
}

#[test]
fn exp_reverse_test() {
    let mut map = TreeMap::with_comparator(Reverse(Natural));
    for i in shuffled(100, 1) {
        map.insert(i, i * 2).unwrap();
    }
    map.check();
    let keys: Vec<usize> = map.keys().copied().collect();
    let expected: Vec<usize> = (0..100).rev().collect();
    assert_eq!(keys, expected);
    assert_eq!(map.get(&40), Ok(Some(&80)));
}

#[test]
fn exp_shape_test() {
    //       5
    //      / \
    //     2   8
    //      \   \
    //       3   9
    let mut map: TreeMap<i32, &str> = TreeMap::new();
    let root = map
        .make_node(5, "five")
        .with_left(map.make_node(2, "two").with_right(map.make_node(3, "three")))
        .with_right(map.make_node(8, "eight").with_right(map.make_node(9, "nine")));
    map.set_tree(Some(root), 5);
    map.check();
    assert_eq!(map.height(), 3);
    assert_eq!(map.key_set(), [&2, &3, &5, &8, &9]);
    assert_eq!(map.find_node(&3).unwrap().map(|n| *n.value()), Some("three"));
    assert_eq!(map.find_node(&9).unwrap().map(|n| *n.key()), Some(9));
    assert!(map.find_node(&4).unwrap().is_none());
    assert!(map.find_node(&1).unwrap().is_none());
    assert!(map.contains_value(&"nine"));

    map.insert(4, "four").unwrap();
    let three = map.find_node(&3).unwrap().unwrap();
    assert_eq!(three.right.as_ref().map(|n| n.key), Some(4));
    assert_eq!(map.height(), 4);
    map.check();
}

#[test]
fn exp_set_tree_unchecked_test() {
    // A mis-ordered tree is accepted; lookups follow the comparisons.
    let mut map: TreeMap<i32, i32> = TreeMap::new();
    let root = map.make_node(1, 10).with_left(map.make_node(2, 20));
    map.set_tree(Some(root), 2);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&2), Ok(None));
    assert_eq!(map.key_set(), [&2, &1]);
    map.set_tree(None, 0);
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}

#[test]
fn exp_chain_test() {
    let n = CHAIN;
    let mut map = TreeMap::new();
    for i in 0..n {
        map.insert(i, i).unwrap();
    }
    assert_eq!(map.height(), n);
    assert_eq!(map.len(), n);
    assert!(map.keys().copied().eq(0..n));
    assert_eq!(map.get(&(n - 1)), Ok(Some(&(n - 1))));
    assert!(map.contains_value(&0));
    assert_eq!(map.values().len(), n);
    let copy = map.clone();
    assert_eq!(copy.height(), n);
    assert!(copy == map);
    map.clear();
    assert!(map.is_empty());
    drop(copy);
}

#[test]
fn exp_clone_shape_test() {
    let mut map = TreeMap::new();
    for k in [50, 30, 70, 20, 40, 60, 80, 10] {
        map.insert(k, k.to_string()).unwrap();
    }
    let copy = map.clone();
    copy.check();
    assert_eq!(copy.height(), map.height());
    assert_eq!(copy, map);
    assert_eq!(format!("{:?}", copy), format!("{:?}", map));
    map.insert(90, "ninety".to_string()).unwrap();
    assert_ne!(copy, map);
    assert_eq!(copy.len(), 8);
}

#[test]
fn exp_iter_test() {
    let map = TreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    let mut it = map.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next(), Some((&1, &'a')));
    let rest = it.clone();
    assert_eq!(it.len(), 2);
    assert_eq!(it.next(), Some((&2, &'b')));
    assert_eq!(it.next(), Some((&3, &'c')));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(rest.count(), 2);
    let mut n = 0;
    for (k, v) in &map {
        assert_eq!(*v as u8 - b'a' + 1, *k as u8);
        n += 1;
    }
    assert_eq!(n, 3);
    assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b', 3: 'c'}");
}

#[test]
fn exp_random_test() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut exp = TreeMap::new();
    let mut sm = std::collections::BTreeMap::new();
    for _ in 0..if cfg!(miri) { 200 } else { 20000 } {
        let k: u16 = rng.gen_range(0..2000);
        let v: u8 = rng.gen();
        assert_eq!(exp.insert(k, v), Ok(sm.insert(k, v)));
    }
    exp.check();
    assert_eq!(exp.len(), sm.len());
    assert!(exp.iter().eq(sm.iter()));
    for k in 0..2000 {
        assert_eq!(exp.get(&k), Ok(sm.get(&k)));
    }
    let distinct: std::collections::HashSet<&u8> = sm.values().collect();
    assert_eq!(exp.values(), distinct);
}

#[test]
fn exp_from_iter_test() {
    let map: TreeMap<_, _> = shuffled(1000, 7).into_iter().map(|k| (k, k % 10)).collect();
    map.check();
    assert_eq!(map.len(), 1000);
    assert_eq!(map.values().len(), 10);
    assert_eq!(map.key_set().len(), map.len());
    let mut other = TreeMap::new();
    other.extend(map.iter().map(|(k, v)| (*k, *v)));
    assert_eq!(other, map);
}

#[test]
fn exp_mem_test() {
    let n = N;
    let mut map = TreeMap::new();
    for i in shuffled(n, 3) {
        map.insert(i as u32, 1u8).unwrap();
    }
    println!("Done insertions, height {}", map.height());
    print_memory();
    println!("Required memory: {} bytes", n * 5);
}

#[test]
fn std_mem_test() {
    let n = N;
    let mut map = std::collections::BTreeMap::new();
    for i in shuffled(n, 3) {
        map.insert(i as u32, 1u8);
    }
    print_memory();
    println!("Required memory: {} bytes", n * 5);
}

#[test]
fn exp_get_test() {
    let n = N;
    let mut m = TreeMap::new();
    for i in shuffled(n, 5) {
        m.insert(i, i).unwrap();
    }
    assert!(m.len() == n);
    print_memory();
    for _rep in 0..REP / 10 {
        for i in 0..n {
            assert!(m.get(&i) == Ok(Some(&i)));
        }
    }
}

struct BadClone {
    x: usize,
}
impl Clone for BadClone {
    fn clone(&self) -> Self {
        if self.x == 50 {
            panic!();
        }
        Self { x: self.x }
    }
}

#[test]
fn exp_bad_clone_test() {
    let mut map = TreeMap::new();
    for i in 0..100 {
        map.insert(i, BadClone { x: i }).unwrap();
    }
    let _ = std::panic::catch_unwind(|| {
        let _ = map.clone();
    });
    assert_eq!(map.len(), 100);
}
