mod common;

use common::SequenceRng;
use frandom_core::{AliasError, AliasTable, Pcg32, ALIAS_POW2_32BIT, WEIGHT_POW2_32BIT};

const SIZES: [u32; 6] = [1, 2, 4, 8, 16, 32];

#[test]
fn full_table_matches_the_float_lookup_constants() {
    let table = AliasTable::build(32);
    assert_eq!(table.average(), 1 << 27);
    assert_eq!(table.weights(), &WEIGHT_POW2_32BIT[..]);

    for i in 0..32u32 {
        if table.weight(i) < table.average() {
            assert_eq!(32 - table.alias(i), u32::from(ALIAS_POW2_32BIT[i as usize]), "bucket {i}");
        }
    }
}

#[test]
fn weights_never_exceed_average() {
    for size in SIZES {
        let table = AliasTable::build(size);
        assert_eq!(table.size(), size);
        assert_eq!(table.average(), 1 << (size - size.ilog2()));
        for &w in table.weights() {
            assert!(w <= table.average(), "size {size}: weight {w}");
        }
        for &a in table.aliases() {
            assert!(a < size);
        }
    }
}

#[test]
fn donated_mass_reconstructs_the_power_of_two_weights() {
    for size in SIZES {
        let table = AliasTable::build(size);
        let average = u64::from(table.average());
        let mut mass: Vec<u64> = table.weights().iter().map(|&w| u64::from(w)).collect();
        for i in 0..size {
            let alias = table.alias(i);
            if alias != i {
                mass[alias as usize] += average - u64::from(table.weight(i));
            }
        }

        let surplus: Vec<i64> = mass
            .iter()
            .enumerate()
            .map(|(i, &m)| m as i64 - (1i64 << i))
            .collect();
        // Only the bucket closed by the drain step carries the one-unit rounding surplus.
        assert_eq!(surplus.iter().sum::<i64>(), table.drain_deficit(), "size {size}");
        assert_eq!(surplus.iter().filter(|&&s| s != 0).count(), 1, "size {size}");
    }
}

#[test]
fn drain_only_closes_the_single_unit_deficit() {
    for size in SIZES {
        let table = AliasTable::build(size);
        assert_eq!(table.drained(), 1, "size {size}");
        assert_eq!(table.drain_deficit(), 1, "size {size}");
    }
}

#[test]
fn rebuild_is_deterministic() {
    let first = AliasTable::build(32);
    let mut second = AliasTable::build(4);
    second.rebuild(32);
    assert_eq!(first, second);
    assert_eq!(first.weights(), second.weights());
    assert_eq!(first.aliases(), second.aliases());
}

#[test]
fn try_build_rejects_bad_sizes() {
    assert_eq!(AliasTable::try_build(0), Err(AliasError::InvalidSize(0)));
    assert_eq!(AliasTable::try_build(12), Err(AliasError::InvalidSize(12)));
    assert_eq!(AliasTable::try_build(64), Err(AliasError::InvalidSize(64)));
    assert_eq!(AliasTable::try_build(16), Ok(AliasTable::build(16)));
}

#[test]
#[should_panic(expected = "alias table size must be a power of two")]
fn build_panics_on_non_power_of_two() {
    let _ = AliasTable::build(24);
}

#[test]
#[should_panic(expected = "out of range")]
fn weight_lookup_is_bounds_checked() {
    let table = AliasTable::build(8);
    let _ = table.weight(8);
}

#[test]
fn every_draw_pair_of_a_small_table_lands_exactly() {
    // size 4, average 4: enumerate all 16 (index, threshold) pairs.
    let table = AliasTable::build(4);
    let words = (0..4u32).flat_map(|index| (0..4u32).flat_map(move |t| [index, t]));
    let mut rng = SequenceRng::new(words);

    let mut counts = [0u32; 4];
    for _ in 0..16 {
        counts[table.sample(&mut rng) as usize] += 1;
    }
    assert_eq!(rng.remaining(), 0);
    // Target 1:2:4:8 out of 15; the drained bucket absorbs the sixteenth unit.
    assert_eq!(counts, [1, 2, 5, 8]);
}

#[test]
fn sampling_follows_power_of_two_weights() {
    let table = AliasTable::build(32);
    let mut rng = Pcg32::with_seed(2024);
    let samples = 10_000_000u32;

    let mut histogram = [0u64; 32];
    for _ in 0..samples {
        histogram[table.sample(&mut rng) as usize] += 1;
    }

    let total_weight = (u64::MAX >> 32) as f64;
    for (i, &observed) in histogram.iter().enumerate() {
        let expected = f64::from(samples) * (1u64 << i) as f64 / total_weight;
        let tolerance = 6.0 * expected.sqrt() + 1.0;
        assert!(
            (observed as f64 - expected).abs() <= tolerance,
            "bucket {i}: observed {observed}, expected {expected:.1}"
        );
    }
}
