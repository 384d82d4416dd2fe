//! Regulated heavy metals and their fixed reference tables.
//!
//! Every table is a [`MetalTable`], a five-slot array indexed by
//! [`MetalSymbol`], so a table cannot be missing an entry.

use core::fmt;
use core::ops::Index;

use serde::{Deserialize, Serialize};

/// The five regulated heavy metals, in canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetalSymbol {
    Pb,
    Cd,
    As,
    Cr,
    Se,
}

impl MetalSymbol {
    /// Canonical order: Pb, Cd, As, Cr, Se.
    pub const ALL: [MetalSymbol; 5] = [
        MetalSymbol::Pb,
        MetalSymbol::Cd,
        MetalSymbol::As,
        MetalSymbol::Cr,
        MetalSymbol::Se,
    ];

    /// Number of regulated metals.
    pub const COUNT: usize = Self::ALL.len();

    const fn slot(self) -> usize {
        match self {
            MetalSymbol::Pb => 0,
            MetalSymbol::Cd => 1,
            MetalSymbol::As => 2,
            MetalSymbol::Cr => 3,
            MetalSymbol::Se => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetalSymbol::Pb => "Lead",
            MetalSymbol::Cd => "Cadmium",
            MetalSymbol::As => "Arsenic",
            MetalSymbol::Cr => "Chromium",
            MetalSymbol::Se => "Selenium",
        }
    }

    /// Human-readable label used in exceedance reports, e.g. "Lead (Pb)".
    pub fn label(self) -> &'static str {
        match self {
            MetalSymbol::Pb => "Lead (Pb)",
            MetalSymbol::Cd => "Cadmium (Cd)",
            MetalSymbol::As => "Arsenic (As)",
            MetalSymbol::Cr => "Chromium (Cr)",
            MetalSymbol::Se => "Selenium (Se)",
        }
    }

    /// Regulatory limit in mg/L.
    pub fn standard(self) -> f64 {
        STANDARDS[self]
    }

    /// Weight used by HPI, the reciprocal of the standard.
    pub fn weight(self) -> f64 {
        WEIGHTS[self]
    }

    /// Ecological toxic response factor used by ERI.
    pub fn toxic_factor(self) -> f64 {
        TOXIC_FACTORS[self]
    }
}

impl fmt::Display for MetalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MetalSymbol::Pb => "Pb",
            MetalSymbol::Cd => "Cd",
            MetalSymbol::As => "As",
            MetalSymbol::Cr => "Cr",
            MetalSymbol::Se => "Se",
        };
        f.write_str(symbol)
    }
}

/// One value per metal, stored in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalTable<T>([T; MetalSymbol::COUNT]);

impl<T: Copy> MetalTable<T> {
    /// Values in canonical order Pb, Cd, As, Cr, Se.
    pub const fn new(values: [T; MetalSymbol::COUNT]) -> Self {
        MetalTable(values)
    }

    /// Iterate `(metal, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (MetalSymbol, T)> + '_ {
        MetalSymbol::ALL.iter().map(move |&m| (m, self.0[m.slot()]))
    }
}

impl<T> Index<MetalSymbol> for MetalTable<T> {
    type Output = T;

    fn index(&self, metal: MetalSymbol) -> &T {
        &self.0[metal.slot()]
    }
}

/// BIS/WHO drinking-water limits in mg/L.
pub const STANDARDS: MetalTable<f64> = MetalTable::new([0.01, 0.003, 0.01, 0.05, 0.01]);

/// HPI weights, `1 / standard` per metal.
pub const WEIGHTS: MetalTable<f64> = MetalTable::new([
    1.0 / STANDARDS.0[0],
    1.0 / STANDARDS.0[1],
    1.0 / STANDARDS.0[2],
    1.0 / STANDARDS.0[3],
    1.0 / STANDARDS.0[4],
]);

/// Ecological toxic response factors. Cadmium is the most hazardous.
pub const TOXIC_FACTORS: MetalTable<f64> = MetalTable::new([5.0, 30.0, 10.0, 2.0, 5.0]);
