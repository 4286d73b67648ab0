use std::fmt;

use crate::analysis::sbox::SboxTable;
use crate::analysis::{avalanche, bit_independence, differential, walsh};

/// Шесть доступных метрик
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    LinearApproximation,
    Nonlinearity,
    StrictAvalanche,
    DifferentialApproximation,
    BicSac,
    BicNl,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::LinearApproximation,
        Metric::Nonlinearity,
        Metric::StrictAvalanche,
        Metric::DifferentialApproximation,
        Metric::BicSac,
        Metric::BicNl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::LinearApproximation => "Linear Approximation Probability (LAP)",
            Metric::Nonlinearity => "Nonlinearity",
            Metric::StrictAvalanche => "Strict Avalanche Criterion (SAC)",
            Metric::DifferentialApproximation => "Differential Approximation Probability (DAP)",
            Metric::BicSac => "Bit Independence Criterion - SAC (BIC-SAC)",
            Metric::BicNl => "Bit Independence Criterion - Nonlinearity (BIC-NL)",
        }
    }
}

/// Результаты запрошенных метрик; невыбранные остаются None
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationReport {
    pub lap: Option<f64>,
    pub nonlinearity: Option<u32>,
    pub sac: Option<f64>,
    pub dap: Option<f64>,
    pub bic_sac: Option<f64>,
    pub bic_nl: Option<u32>,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = self.lap {
            writeln!(f, "{}: {:.6}", Metric::LinearApproximation.label(), v)?;
        }
        if let Some(v) = self.nonlinearity {
            writeln!(f, "{}: {}", Metric::Nonlinearity.label(), v)?;
        }
        if let Some(v) = self.sac {
            writeln!(f, "{}: {:.10}", Metric::StrictAvalanche.label(), v)?;
        }
        if let Some(v) = self.dap {
            writeln!(f, "{}: {:.10}", Metric::DifferentialApproximation.label(), v)?;
        }
        if let Some(v) = self.bic_sac {
            writeln!(f, "{}: {:.10}", Metric::BicSac.label(), v)?;
        }
        if let Some(v) = self.bic_nl {
            writeln!(f, "{}: {}", Metric::BicNl.label(), v)?;
        }
        Ok(())
    }
}

/// Вычисляет выбранное подмножество метрик. Максимум спектра Уолша
/// считается один раз, если запрошены и LAP, и нелинейность.
pub fn evaluate(sbox: &SboxTable, metrics: &[Metric]) -> EvaluationReport {
    let wants = |m: Metric| metrics.contains(&m);
    let mut report = EvaluationReport::default();

    if wants(Metric::LinearApproximation) || wants(Metric::Nonlinearity) {
        let max_walsh = walsh::max_absolute_walsh(sbox);
        if wants(Metric::LinearApproximation) {
            report.lap = Some(walsh::lap_from_max_walsh(max_walsh, sbox.size()));
        }
        if wants(Metric::Nonlinearity) {
            report.nonlinearity = Some(walsh::nonlinearity_from_max_walsh(max_walsh, sbox.size()));
        }
    }
    if wants(Metric::StrictAvalanche) {
        report.sac = Some(avalanche::strict_avalanche_criterion(sbox));
    }
    if wants(Metric::DifferentialApproximation) {
        report.dap = Some(differential::differential_approximation_probability(sbox));
    }
    if wants(Metric::BicSac) {
        report.bic_sac = Some(bit_independence::bic_sac(sbox));
    }
    if wants(Metric::BicNl) {
        report.bic_nl = Some(bit_independence::bic_nl(sbox));
    }
    report
}

/// Все шесть метрик сразу
pub fn evaluate_all(sbox: &SboxTable) -> EvaluationReport {
    evaluate(sbox, &Metric::ALL)
}
