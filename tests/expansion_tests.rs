use cube_words::expansion::{expand, expand_batch, expansion_count};
use cube_words::{all_arrangements, Arrangement, CubePool};
use std::collections::HashSet;

fn two_cubes() -> CubePool {
    CubePool::parse(&["ab", "cd"]).unwrap()
}

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_expand_in_positional_order() {
    let pool = two_cubes();

    let forward: HashSet<String> = expand(&pool, &Arrangement(vec![0, 1])).collect();
    assert_eq!(forward, set(&["ac", "ad", "bc", "bd"]));

    let backward: HashSet<String> = expand(&pool, &Arrangement(vec![1, 0])).collect();
    assert_eq!(backward, set(&["ca", "da", "cb", "db"]));
}

#[test]
fn test_expansion_has_no_duplicates() {
    let pool = CubePool::standard();
    let arrangement = Arrangement(vec![0, 1, 2]);

    let words: Vec<String> = expand(&pool, &arrangement).collect();
    let distinct: HashSet<&String> = words.iter().collect();

    assert_eq!(words.len(), 8 * 6 * 8);
    assert_eq!(words.len(), expansion_count(&pool, &arrangement));
    assert_eq!(distinct.len(), words.len());
    assert!(words.iter().all(|w| w.chars().count() == 3));
}

#[test]
fn test_expansion_count_is_product_of_sizes() {
    let pool = CubePool::standard();
    assert_eq!(expansion_count(&pool, &Arrangement(vec![3, 1])), 7 * 6);
    assert_eq!(expansion_count(&pool, &Arrangement(vec![0, 1, 2, 3])), 8 * 6 * 8 * 7);
    assert_eq!(expansion_count(&pool, &Arrangement(Vec::new())), 0);
}

#[test]
fn test_expand_batch_merges_arrangements() {
    let pool = two_cubes();
    let batch = all_arrangements(pool.len(), 2);

    let candidates = expand_batch(&pool, &batch);
    assert_eq!(
        candidates,
        set(&["ac", "ad", "bc", "bd", "ca", "da", "cb", "db"])
    );
}

#[test]
fn test_expand_batch_deduplicates_across_arrangements() {
    let pool = CubePool::parse(&["ab", "ab"]).unwrap();
    let batch = all_arrangements(pool.len(), 2);

    let candidates = expand_batch(&pool, &batch);
    assert_eq!(candidates, set(&["aa", "ab", "ba", "bb"]));
}

#[test]
fn test_expand_doubled_pool() {
    let pool = CubePool::parse(&["a", "b"]).unwrap().for_word_length(4).unwrap();
    let words: HashSet<String> = expand(&pool, &Arrangement(vec![0, 2, 1, 3])).collect();
    assert_eq!(words, set(&["aabb"]));
}
