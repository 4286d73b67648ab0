pub mod avalanche;
pub mod bit_independence;
pub mod bits;
pub mod differential;
pub mod evaluation;
pub mod sbox;
pub mod walsh;
