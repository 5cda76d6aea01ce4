use crate::ring::Polynomial;
use crate::ring::polynomial::DEFAULT_FIELD_WIDTH;

use std::fmt;

/// One line of the Blankinship matrix: `x1·P0 + x2·Q0 = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub x1: Polynomial,
    pub x2: Polynomial,
    pub value: Polynomial,
}

impl Row {
    /// `self += factor · other`, applied to all three entries.
    pub fn add_multiple(&mut self, other: &Row, factor: &Polynomial) {
        self.value = &self.value + &other.value * factor;
        self.x1 = &self.x1 + &other.x1 * factor;
        self.x2 = &self.x2 + &other.x2 * factor;
    }

    /// Whether `x1·p0 + x2·q0` equals `value`.
    pub fn combines(&self, p0: &Polynomial, q0: &Polynomial) -> bool {
        &self.x1 * p0 + &self.x2 * q0 == self.value
    }

    fn render(&self, width: usize) -> [String; 3] {
        [
            self.x1.render(width),
            self.x2.render(width),
            self.value.render(width),
        ]
    }
}

/// The 2×3 matrix
///
/// ```text
/// x1  x2  P
/// y1  y2  Q
/// ```
///
/// started from the identity next to the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankinshipMatrix {
    pub top: Row,
    pub bottom: Row,
}

impl BlankinshipMatrix {
    pub fn new(p: Polynomial, q: Polynomial) -> Self {
        Self {
            top: Row {
                x1: Polynomial::one(),
                x2: Polynomial::zero(),
                value: p,
            },
            bottom: Row {
                x1: Polynomial::zero(),
                x2: Polynomial::one(),
                value: q,
            },
        }
    }

    /// Exchanges the two rows.
    pub fn switch(&mut self) {
        std::mem::swap(&mut self.top, &mut self.bottom);
    }

    /// Two lines with the three columns aligned and separated by `" | "`.
    pub fn render(&self, width: usize) -> String {
        let top = self.top.render(width);
        let bottom = self.bottom.render(width);

        let mut lines = [String::new(), String::new()];
        for (column, (upper, lower)) in top.iter().zip(&bottom).enumerate() {
            let column_width = upper.len().max(lower.len());
            if column > 0 {
                lines[0].push_str(" | ");
                lines[1].push_str(" | ");
            }
            lines[0].push_str(&format!("{:<column_width$}", upper));
            lines[1].push_str(&format!("{:<column_width$}", lower));
        }

        format!("{}\n{}", lines[0].trim_end(), lines[1].trim_end())
    }
}

impl fmt::Display for BlankinshipMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FIELD_WIDTH))
    }
}
