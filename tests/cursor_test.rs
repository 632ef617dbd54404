// Copyright 2026 Leapjoin Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cursor Seek Tests
//!
//! A seek must land exactly where filtering the tree's sorted key list
//! would, whether the probes move forward monotonically or jump around.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use leapjoin::{key, BTree, Datum, Key};

fn random_key(rng: &mut StdRng, key_len: usize, space: i64) -> Key {
    (0..key_len)
        .map(|_| Datum::from(rng.gen_range(0..space)))
        .collect()
}

#[test]
fn test_seek_on_empty_tree() {
    let tree: BTree<()> = BTree::new(2, 2).unwrap();
    let mut cursor = tree.cursor();
    assert_eq!(cursor.seek_gte(&key(["a", "a"])), None);
    assert_eq!(cursor.seek_gt(&key(["a", "a"])), None);
}

#[test]
fn test_seek_walkthrough() {
    let mut tree = BTree::new(2, 1).unwrap();
    for i in 1..=10i64 {
        tree.insert(key([i]), ());
    }
    let mut cursor = tree.cursor();
    assert_eq!(cursor.seek_gte(&key([5])), Some(&key([5])));
    assert_eq!(cursor.seek_gt(&key([5])), Some(&key([6])));
    assert_eq!(cursor.seek_gt(&key([10])), None);
}

/// Every seek agrees with the reference answer: filter the sorted key list
/// by the probe and take the first survivor.
#[test]
fn test_seek_matches_filtered_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    for &(min_keys, key_len) in &[(1usize, 1usize), (2, 2), (2, 3)] {
        let mut tree = BTree::new(min_keys, key_len).unwrap();
        let mut keys: Vec<Key> = Vec::new();
        for _ in 0..250 {
            let k = random_key(&mut rng, key_len, 8);
            if tree.insert(k.clone(), ()).is_none() {
                keys.push(k);
            }
        }
        keys.sort();
        tree.check_invariants();

        let mut cursor = tree.cursor();
        for _ in 0..600 {
            let probe = random_key(&mut rng, key_len, 8);
            let want_gte = keys.iter().find(|k| **k >= probe).cloned();
            assert_eq!(cursor.seek_gte(&probe).cloned(), want_gte, "gte {:?}", probe);
            let want_gt = keys.iter().find(|k| **k > probe).cloned();
            assert_eq!(cursor.seek_gt(&probe).cloned(), want_gt, "gt {:?}", probe);
        }
    }
}

/// Driving the cursor with its own results walks every key once.
#[test]
fn test_monotonic_sweep_visits_every_key() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut tree = BTree::new(2, 2).unwrap();
    let mut keys: Vec<Key> = Vec::new();
    for _ in 0..300 {
        let k = random_key(&mut rng, 2, 20);
        if tree.insert(k.clone(), ()).is_none() {
            keys.push(k);
        }
    }
    keys.sort();

    let mut cursor = tree.cursor();
    let mut probe = leapjoin::least_key(2);
    let mut swept = Vec::new();
    while let Some(found) = cursor.seek_gt(&probe) {
        let found = found.clone();
        // a gte re-seek of the key just found lands on it again
        assert_eq!(cursor.seek_gte(&found), Some(&found));
        swept.push(found.clone());
        probe = found;
    }
    assert_eq!(swept, keys);
}

/// Alternating far-forward and far-backward probes still answers exactly.
#[test]
fn test_zigzag_probes() {
    let mut tree = BTree::new(1, 1).unwrap();
    for i in (0..100i64).step_by(5) {
        tree.insert(key([i]), ());
    }
    let mut cursor = tree.cursor();
    for (probe, gte, gt) in [
        (93i64, Some(95i64), Some(95i64)),
        (2, Some(5), Some(5)),
        (95, Some(95), None),
        (0, Some(0), Some(5)),
        (41, Some(45), Some(45)),
        (40, Some(40), Some(45)),
    ] {
        assert_eq!(cursor.seek_gte(&key([probe])), gte.map(|g| key([g])).as_ref());
        assert_eq!(cursor.seek_gt(&key([probe])), gt.map(|g| key([g])).as_ref());
    }
}
