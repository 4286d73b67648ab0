use rayon::prelude::*;

use crate::analysis::sbox::SboxTable;

/// DDT[dx][dy] — число входов x, для которых S(x) ⊕ S(x ⊕ dx) = dy.
/// Полная матрица N×N, включая тривиальную строку dx = 0.
pub fn difference_distribution_table(sbox: &SboxTable) -> Vec<Vec<u32>> {
    let size = sbox.size();
    let s = sbox.values();
    let mut ddt = vec![vec![0u32; size]; size];
    for (dx, row) in ddt.iter_mut().enumerate() {
        for x in 0..size {
            row[usize::from(s[x] ^ s[x ^ dx])] += 1;
        }
    }
    ddt
}

/// Максимальная ячейка DDT по dx ≥ 1 и всем dy, включая dy = 0.
/// Строки считаются по одной, без материализации всей матрицы.
pub fn max_differential_count(sbox: &SboxTable) -> u32 {
    let size = sbox.size();
    let s = sbox.values();
    (1..size)
        .into_par_iter()
        .map(|dx| {
            let mut row = vec![0u32; size];
            for x in 0..size {
                row[usize::from(s[x] ^ s[x ^ dx])] += 1;
            }
            row.into_iter().max().unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// DAP = max DDT[dx][dy] / N. Счётчики целые,
/// единственное деление с плавающей точкой — финальное.
pub fn differential_approximation_probability(sbox: &SboxTable) -> f64 {
    f64::from(max_differential_count(sbox)) / sbox.size() as f64
}
