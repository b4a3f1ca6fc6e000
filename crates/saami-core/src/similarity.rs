//! Ratcliff/Obershelp sequence similarity.

use std::collections::HashMap;

/// Similarity of two strings in `[0, 1]`.
///
/// `2 * M / (len(a) + len(b))`, where `M` counts the characters in the
/// matching blocks found by recursively taking the longest common block and
/// repeating on both sides of it. A missing string scores 0.
pub fn similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Tie-breaking in the block search depends on argument order
    let matched = matching_characters(&a, &b).max(matching_characters(&b, &a));
    2.0 * matched as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        b_index.entry(*c).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b_index, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }

        matched += size;
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest block `a[i..i+size] == b[j..j+size]` inside the given window,
/// earliest in `a` (then in `b`) on ties
fn longest_match(
    a: &[char],
    b_index: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    // run length of the match ending at b[j], for the previous row of a
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next_run_lengths = HashMap::new();

        for &j in b_index.get(c).into_iter().flatten() {
            if j < b_lo {
                continue;
            }
            if j >= b_hi {
                break;
            }

            let size = j
                .checked_sub(1)
                .and_then(|prev| run_lengths.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_run_lengths.insert(j, size);

            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }

        run_lengths = next_run_lengths;
    }

    (best_i, best_j, best_size)
}
