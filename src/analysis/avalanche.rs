use crate::analysis::bits::get_bit;
use crate::analysis::sbox::SboxTable;

/// flip_counts[i][j] — сколько из N входов меняют выходной бит j
/// при инверсии входного бита i. Точные целочисленные счётчики.
pub fn flip_count_matrix(sbox: &SboxTable) -> Vec<Vec<u32>> {
    let n = sbox.bits() as usize;
    let size = sbox.size();
    let s = sbox.values();
    let mut counts = vec![vec![0u32; n]; n];
    for (i, row) in counts.iter_mut().enumerate() {
        for x in 0..size {
            let delta = s[x] ^ s[x ^ (1 << i)];
            for (j, cell) in row.iter_mut().enumerate() {
                *cell += u32::from(get_bit(delta, j as u32));
            }
        }
    }
    counts
}

/// Матрица вероятностей инверсии n×n; каждая ячейка в [0, 1]
pub fn avalanche_matrix(sbox: &SboxTable) -> Vec<Vec<f64>> {
    let size = sbox.size() as f64;
    flip_count_matrix(sbox)
        .into_iter()
        .map(|row| row.into_iter().map(|c| f64::from(c) / size).collect())
        .collect()
}

/// SAC — средняя вероятность инверсии по всем парам (i, j); идеал ≈ 0.5
pub fn strict_avalanche_criterion(sbox: &SboxTable) -> f64 {
    let n = u64::from(sbox.bits());
    let total: u64 = flip_count_matrix(sbox)
        .iter()
        .flatten()
        .map(|&c| u64::from(c))
        .sum();
    total as f64 / (sbox.size() as u64 * n * n) as f64
}
