use std::fmt;

use super::Cone;
use crate::ZMatrix;

fn write_rows(f: &mut fmt::Formatter<'_>, label: &str, m: &ZMatrix) -> fmt::Result {
    writeln!(f, "{label} ({}):", m.height())?;
    for r in m {
        writeln!(f, "  {r}")?;
    }
    Ok(())
}

/// Dump of the stored description (no reduction is triggered).
impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (inequalities, equations) = self.rows();
        writeln!(f, "ambient dimension: {}", self.n)?;
        write_rows(f, "inequalities", &inequalities)?;
        write_rows(f, "equations", &equations)
    }
}
