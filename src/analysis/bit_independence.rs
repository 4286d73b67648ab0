use rayon::prelude::*;

use crate::analysis::bits::get_bit;
use crate::analysis::sbox::SboxTable;
use crate::analysis::walsh::boolean_nonlinearity;

/// Производная таблицы по направлению dx: D(x) = S(x) ⊕ S(x ⊕ dx)
fn derivative(sbox: &SboxTable, dx: usize) -> Vec<u16> {
    let s = sbox.values();
    (0..sbox.size()).map(|x| s[x] ^ s[x ^ dx]).collect()
}

/// BIC-SAC: средний |corr| индикаторов изменения пар выходных битов (j, k)
/// при инверсии одного входного бита i, corr = 2·agree/N − 1.
/// Идеал — 0 (пары меняются независимо). Накопление целочисленное,
/// единственное деление — финальное.
pub fn bic_sac(sbox: &SboxTable) -> f64 {
    let n = sbox.bits() as usize;
    let size = sbox.size();
    let mut total: u64 = 0;
    let mut terms: u64 = 0;
    for i in 0..n {
        let deriv = derivative(sbox, 1 << i);
        for j in 0..n {
            for k in (j + 1)..n {
                let agree = deriv
                    .iter()
                    .filter(|&&d| get_bit(d, j as u32) == get_bit(d, k as u32))
                    .count();
                // |2·agree − N| — числитель |corr| до деления на N
                total += (2 * agree as i64 - size as i64).unsigned_abs();
                terms += 1;
            }
        }
    }
    total as f64 / (size as u64 * terms) as f64
}

/// BIC-NL: минимальная нелинейность по всем XOR-комбинациям
/// пар выходных битов f(x) = bit_j(S(x)) ⊕ bit_k(S(x)).
/// Слабая пара опускает всю оценку, поэтому берётся минимум.
pub fn bic_nl(sbox: &SboxTable) -> u32 {
    let n = sbox.bits() as usize;
    let s = sbox.values();
    let pairs: Vec<(u32, u32)> = (0..n as u32)
        .flat_map(|j| ((j + 1)..n as u32).map(move |k| (j, k)))
        .collect();
    pairs
        .into_par_iter()
        .map(|(j, k)| {
            let truth: Vec<u8> = s.iter().map(|&y| get_bit(y, j) ^ get_bit(y, k)).collect();
            boolean_nonlinearity(&truth)
        })
        .min()
        .unwrap_or(0)
}
