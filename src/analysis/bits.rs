/// Вес Хэмминга: число установленных битов
pub fn hamming_weight(x: u16) -> u32 {
    x.count_ones()
}

/// Скалярное произведение над GF(2): чётность popcount(a & b)
pub fn bit_dot(a: u16, b: u16) -> u8 {
    ((a & b).count_ones() & 1) as u8
}

/// Бит i значения x, нумерация с нуля от младшего.
/// Один и тот же порядок используется для входных и выходных битов.
pub fn get_bit(x: u16, i: u32) -> u8 {
    ((x >> i) & 1) as u8
}
