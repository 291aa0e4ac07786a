//! Sum-of-products construction and Quine-McCluskey minimization
//!
//! Both entry points are pure functions over a truth-table snapshot, selected
//! by output column name:
//!
//! - [`compute_sum`] builds the direct sum of products, one single-row cube
//!   per ONE row, with no merging.
//! - [`compute_minimal`] runs prime-implicant extraction over the ONE and
//!   DONT_CARE rows, selects the essential primes, and greedily covers
//!   whatever rows remain.
//!
//! All intermediate cube sets live in ordered containers keyed by the cube
//! order (`values`, then `unknowns`), so results are reproducible across runs
//! and platforms rather than depending on hash iteration order.
//!
//! # Examples
//!
//! ```
//! use qmc_logic::{compute_minimal, sum_to_expression, Entry, TableData, TruthTable};
//!
//! let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
//! table
//!     .set_output_column(0, &[Entry::Zero, Entry::Zero, Entry::Zero, Entry::One])
//!     .unwrap();
//!
//! let minimal = compute_minimal(&table, "out").unwrap();
//! let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
//! assert_eq!(expr.to_string(), "a * b");
//! ```

mod implicant;

pub use implicant::{sum_to_expression, table_sum_to_expression, Implicant, Terms};

use crate::table::{Entry, TruthTable};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// Direct sum of products: one single-row cube per ONE row
///
/// Rows come out in ascending row order. An output name the table does not
/// know yields an empty list.
///
/// # Examples
///
/// ```
/// use qmc_logic::{compute_sum, Entry, TableData};
///
/// let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
/// table
///     .set_output_column(0, &[Entry::Zero, Entry::One, Entry::One, Entry::Zero])
///     .unwrap();
///
/// let sum = compute_sum(&table, "out");
/// let rows: Vec<usize> = sum.iter().map(|c| c.row().unwrap()).collect();
/// assert_eq!(rows, [1, 2]);
/// ```
pub fn compute_sum<T: TruthTable + ?Sized>(table: &T, output: &str) -> Vec<Implicant> {
    let Some(column) = table.output_index(output) else {
        return Vec::new();
    };
    let mut sum = Vec::new();
    for row in 0..table.row_count() {
        if table.output_entry(row, column) == Entry::One {
            sum.push(Implicant::of_row(row));
        }
    }
    sum
}

/// Minimized sum of products via Quine-McCluskey reduction
///
/// Returns `None` when the column has no ONE or ZERO entry at all: nothing is
/// determined yet, which callers must present differently from the constant
/// zero function (an empty `Some` list). An output name the table does not
/// know yields an empty `Some` list.
///
/// The returned cubes are sorted by the cube order (`values`, then
/// `unknowns`); the union of their covered rows includes every ONE row and
/// excludes every ZERO row, with DONT_CARE rows covered or not as merging
/// found convenient.
///
/// # Examples
///
/// ```
/// use qmc_logic::{compute_minimal, sum_to_expression, Entry, TableData, TruthTable};
///
/// // 00 -> 0, 01 -> don't care, 10 -> 0, 11 -> 1
/// let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
/// table
///     .set_output_column(0, &[Entry::Zero, Entry::DontCare, Entry::Zero, Entry::One])
///     .unwrap();
///
/// // The don't-care row merges with row 3, leaving the single literal b
/// let minimal = compute_minimal(&table, "out").unwrap();
/// let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
/// assert_eq!(expr.to_string(), "b");
/// ```
pub fn compute_minimal<T: TruthTable + ?Sized>(table: &T, output: &str) -> Option<Vec<Implicant>> {
    let Some(column) = table.output_index(output) else {
        return Some(Vec::new());
    };

    // Seed one cube per row. ONE rows become required-coverage targets;
    // DONT_CARE rows participate in merging but are never required; ZERO rows
    // are left out entirely.
    let mut current: BTreeMap<Implicant, Entry> = BTreeMap::new();
    let mut to_cover: BTreeSet<Implicant> = BTreeSet::new();
    let mut determined = false;
    for row in 0..table.row_count() {
        match table.output_entry(row, column) {
            Entry::Zero => determined = true,
            Entry::One => {
                determined = true;
                let cube = Implicant::of_row(row);
                current.insert(cube, Entry::One);
                to_cover.insert(cube);
            }
            Entry::DontCare => {
                current.insert(Implicant::of_row(row), Entry::DontCare);
            }
        }
    }
    if !determined {
        return None;
    }
    debug!(
        "minimal({}): {} seed cubes, {} required rows",
        output,
        current.len(),
        to_cover.len()
    );

    // Merge adjacent cubes generation by generation, harvesting primes: a
    // cube tagged ONE that no merge consumed cannot grow further.
    let mut primes: BTreeSet<Implicant> = BTreeSet::new();
    while current.len() > 1 {
        let mut consumed: BTreeSet<Implicant> = BTreeSet::new();
        let mut next: BTreeMap<Implicant, Entry> = BTreeMap::new();
        for (&cube, &tag) in &current {
            let mut bit = 1u32;
            while bit <= cube.values() {
                if cube.values() & bit != 0 {
                    let opposite = Implicant::new(cube.unknowns(), cube.values() ^ bit);
                    if let Some(&opposite_tag) = current.get(&opposite) {
                        consumed.insert(cube);
                        consumed.insert(opposite);
                        let merged = Implicant::new(cube.unknowns() | bit, opposite.values());
                        let merged_tag =
                            if tag == Entry::DontCare && opposite_tag == Entry::DontCare {
                                Entry::DontCare
                            } else {
                                Entry::One
                            };
                        // The same merged cube can arise from several bit
                        // pairs; it covers a ONE row as soon as any of them
                        // involved one, so ONE wins over DONT_CARE.
                        next.entry(merged)
                            .and_modify(|existing| {
                                if merged_tag == Entry::One {
                                    *existing = Entry::One;
                                }
                            })
                            .or_insert(merged_tag);
                    }
                }
                bit <<= 1;
            }
        }
        for (&cube, &tag) in &current {
            if tag == Entry::One && !consumed.contains(&cube) {
                primes.insert(cube);
            }
        }
        trace!(
            "minimal({}): generation of {} cubes -> {} merged, {} primes so far",
            output,
            current.len(),
            next.len(),
            primes.len()
        );
        current = next;
    }
    // At most one cube remains; if it is required it is prime too.
    for (&cube, &tag) in &current {
        if tag == Entry::One {
            primes.insert(cube);
        }
    }
    debug!("minimal({}): {} prime implicants", output, primes.len());

    // Essential primes: a required row covered by exactly one surviving prime
    // forces that prime into the result. Every row the chosen prime covers is
    // marked covered, don't-care rows included.
    let mut chosen: BTreeSet<Implicant> = BTreeSet::new();
    let mut covered: BTreeSet<Implicant> = BTreeSet::new();
    for &required in &to_cover {
        if covered.contains(&required) {
            continue;
        }
        let row = required.values() as usize;
        let mut essential: Option<Implicant> = None;
        for &prime in &primes {
            if prime.covers(row) {
                if essential.is_none() {
                    essential = Some(prime);
                } else {
                    essential = None;
                    break;
                }
            }
        }
        if let Some(prime) = essential {
            chosen.insert(prime);
            primes.remove(&prime);
            covered.extend(prime.terms());
        }
    }
    let mut uncovered: BTreeSet<Implicant> = to_cover.difference(&covered).copied().collect();
    debug!(
        "minimal({}): {} essential primes, {} rows still uncovered",
        output,
        chosen.len(),
        uncovered.len()
    );

    // Greedy fallback for whatever the essential primes missed: repeatedly
    // take the prime covering the most still-uncovered required rows. Primes
    // covering none are dropped; ties go to the smallest cube in cube order.
    while !uncovered.is_empty() {
        let mut best: Option<Implicant> = None;
        let mut best_count = 0;
        let mut exhausted: Vec<Implicant> = Vec::new();
        for &prime in &primes {
            let count = prime.terms().filter(|term| uncovered.contains(term)).count();
            if count == 0 {
                exhausted.push(prime);
            } else if count > best_count {
                best = Some(prime);
                best_count = count;
            }
        }
        for prime in exhausted {
            primes.remove(&prime);
        }
        match best {
            Some(prime) => {
                trace!(
                    "minimal({}): greedy pick {:?} covering {} rows",
                    output,
                    prime,
                    best_count
                );
                chosen.insert(prime);
                primes.remove(&prime);
                for term in prime.terms() {
                    uncovered.remove(&term);
                }
            }
            None => break,
        }
    }

    // BTreeSet iteration already yields the deterministic cube order.
    Some(chosen.into_iter().collect())
}
