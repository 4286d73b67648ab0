mod common;

use common::{aes_sbox, constant_sbox, present_sbox};
use sbox_analysis::SboxTable;
use sbox_analysis::analysis::differential::{
    difference_distribution_table, differential_approximation_probability,
    max_differential_count,
};

#[test]
fn test_ddt_trivial_row() {
    // dx = 0: вся строка сосредоточена в dy = 0
    let ddt = difference_distribution_table(&aes_sbox());
    assert_eq!(ddt[0][0], 256);
    assert!(ddt[0][1..].iter().all(|&c| c == 0));
}

#[test]
fn test_ddt_row_sums() {
    // Каждый вход даёт ровно одну выходную разность
    for table in [aes_sbox(), SboxTable::identity(8), present_sbox()] {
        let size = table.size() as u32;
        let ddt = difference_distribution_table(&table);
        for row in &ddt {
            assert_eq!(row.iter().sum::<u32>(), size);
        }
    }
}

#[test]
fn test_ddt_cells_are_even() {
    // x и x ⊕ dx дают одну и ту же ячейку, счётчики парные
    let ddt = difference_distribution_table(&aes_sbox());
    for row in &ddt {
        for &cell in row {
            assert_eq!(cell % 2, 0);
        }
    }
}

#[test]
fn test_identity_dap_is_maximal() {
    let table = SboxTable::identity(8);
    // S(x) ⊕ S(x ⊕ dx) = dx для всех x
    assert_eq!(max_differential_count(&table), 256);
    assert_eq!(differential_approximation_probability(&table), 1.0);
}

#[test]
fn test_constant_table_concentrates_at_zero_difference() {
    let table = constant_sbox(8, 0x33);
    let ddt = difference_distribution_table(&table);
    for dx in 1..256 {
        assert_eq!(ddt[dx][0], 256);
        assert!(ddt[dx][1..].iter().all(|&c| c == 0));
    }
    // dy = 0 обязан участвовать в максимуме
    assert_eq!(differential_approximation_probability(&table), 1.0);
}

#[test]
fn test_aes_differential_uniformity() {
    let table = aes_sbox();
    assert_eq!(max_differential_count(&table), 4);
    assert_eq!(differential_approximation_probability(&table), 0.015625);
}

#[test]
fn test_present_differential_uniformity() {
    let table = present_sbox();
    assert_eq!(max_differential_count(&table), 4);
    assert_eq!(differential_approximation_probability(&table), 0.25);
}

#[test]
fn test_max_matches_materialized_ddt() {
    for table in [aes_sbox(), present_sbox()] {
        let ddt = difference_distribution_table(&table);
        let expected = ddt[1..]
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap();
        assert_eq!(max_differential_count(&table), expected);
    }
}
