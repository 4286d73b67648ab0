use rayon::prelude::*;

use crate::analysis::bits::bit_dot;
use crate::analysis::sbox::SboxTable;

/// W(a,b) = Σ_x (-1)^{<b,S(x)> ⊕ <a,x>} — знаковый счёт согласий линейной
/// комбинации входных битов с линейной комбинацией выходных по всем N входам.
pub fn walsh_value(sbox: &SboxTable, a: u16, b: u16) -> i32 {
    let mut acc = 0i32;
    for (x, &y) in sbox.values().iter().enumerate() {
        if bit_dot(a, x as u16) == bit_dot(b, y) {
            acc += 1;
        } else {
            acc -= 1;
        }
    }
    acc
}

/// max |W(a,b)| по всем a ∈ [0,N) и ненулевым b ∈ [1,N).
/// Нулевая входная маска участвует, нулевая выходная исключена.
pub fn max_absolute_walsh(sbox: &SboxTable) -> u32 {
    let size = sbox.size();
    (1..size)
        .into_par_iter()
        .map(|b| {
            (0..size)
                .map(|a| walsh_value(sbox, a as u16, b as u16).unsigned_abs())
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// LAP = max |count − N/2| / N = max|W| / 2N.
/// Соглашение зафиксировано по эталону AES: max|W| = 32, LAP = 0.0625.
pub fn linear_approximation_probability(sbox: &SboxTable) -> f64 {
    lap_from_max_walsh(max_absolute_walsh(sbox), sbox.size())
}

pub(crate) fn lap_from_max_walsh(max_walsh: u32, size: usize) -> f64 {
    f64::from(max_walsh) / (2.0 * size as f64)
}

/// NL = 2^(n-1) − max|W| / 2. Значения Уолша имеют ту же чётность,
/// что и N, поэтому деление точное.
pub fn nonlinearity(sbox: &SboxTable) -> u32 {
    nonlinearity_from_max_walsh(max_absolute_walsh(sbox), sbox.size())
}

pub(crate) fn nonlinearity_from_max_walsh(max_walsh: u32, size: usize) -> u32 {
    size as u32 / 2 - max_walsh / 2
}

/// Спектр Уолша одиночной булевой функции, заданной таблицей истинности 0/1
pub fn boolean_walsh_value(truth: &[u8], a: u16) -> i32 {
    let mut acc = 0i32;
    for (x, &f) in truth.iter().enumerate() {
        if f == bit_dot(a, x as u16) {
            acc += 1;
        } else {
            acc -= 1;
        }
    }
    acc
}

/// Нелинейность булевой функции: для одиночной функции в перечислении
/// участвуют все маски a, включая нулевую.
pub fn boolean_nonlinearity(truth: &[u8]) -> u32 {
    let size = truth.len();
    let max_walsh = (0..size)
        .map(|a| boolean_walsh_value(truth, a as u16).unsigned_abs())
        .max()
        .unwrap_or(0);
    size as u32 / 2 - max_walsh / 2
}
