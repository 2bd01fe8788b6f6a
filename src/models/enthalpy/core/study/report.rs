use std::fmt;

use super::ConvergenceResult;

impl fmt::Display for ConvergenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();

        writeln!(
            f,
            "{} convergence over {} samples ({symbol} in {})",
            self.kind,
            self.samples.len(),
            self.kind.unit()
        )?;
        writeln!(f, "{symbol:>12} {:>14} {:>14}", "max error", "avg error")?;
        for sample in &self.samples {
            writeln!(
                f,
                "{:>12.4e} {:>14.6e} {:>14.6e}",
                sample.parameter, sample.max_error, sample.avg_error
            )?;
        }
        writeln!(f, "max: {symbol}^{:.4}", self.max.slope)?;
        write!(f, "avg: {symbol}^{:.4}", self.avg.slope)
    }
}
