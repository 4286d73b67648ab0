use std::fmt;

/// Ошибки валидации таблицы замен
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SboxError {
    /// Длина таблицы не является поддерживаемой степенью двойки
    InvalidTableLength(usize),
    /// Значение таблицы выходит за пределы [0, N-1]
    ValueOutOfRange { index: usize, value: u16 },
}

impl fmt::Display for SboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SboxError::InvalidTableLength(len) => write!(
                f,
                "unsupported table length {len}: expected a power of two between 4 and 65536"
            ),
            SboxError::ValueOutOfRange { index, value } => {
                write!(f, "table entry {value} at index {index} is out of range")
            }
        }
    }
}

impl std::error::Error for SboxError {}

/// Таблица замен: N = 2^n значений, каждое в [0, N-1].
/// Биективность не требуется — метрики определены для любой таблицы.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SboxTable {
    table: Vec<u16>,
    bits: u32,
}

impl SboxTable {
    pub const MIN_BITS: u32 = 2;
    pub const MAX_BITS: u32 = 16;

    /// Проверяет длину и диапазон значений. Валидация выполняется один раз,
    /// до любых вычислений; все анализы принимают уже проверенную таблицу.
    pub fn new(table: Vec<u16>) -> Result<Self, SboxError> {
        let len = table.len();
        if !len.is_power_of_two() {
            return Err(SboxError::InvalidTableLength(len));
        }
        let bits = len.trailing_zeros();
        if !(Self::MIN_BITS..=Self::MAX_BITS).contains(&bits) {
            return Err(SboxError::InvalidTableLength(len));
        }
        let limit = len as u32;
        for (index, &value) in table.iter().enumerate() {
            if u32::from(value) >= limit {
                return Err(SboxError::ValueOutOfRange { index, value });
            }
        }
        Ok(SboxTable { table, bits })
    }

    /// Таблица из байтов (канонический случай n = 8)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SboxError> {
        Self::new(bytes.iter().map(|&b| u16::from(b)).collect())
    }

    /// Тождественная таблица S(x) = x
    pub fn identity(bits: u32) -> Self {
        assert!(
            (Self::MIN_BITS..=Self::MAX_BITS).contains(&bits),
            "bits must be in [{}, {}]",
            Self::MIN_BITS,
            Self::MAX_BITS
        );
        SboxTable {
            table: (0..1usize << bits).map(|x| x as u16).collect(),
            bits,
        }
    }

    /// Число входных/выходных битов n
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Размер таблицы N = 2^n
    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn values(&self) -> &[u16] {
        &self.table
    }

    /// Значение S(x)
    pub fn apply(&self, x: usize) -> u16 {
        self.table[x]
    }
}
