//! Fixed column layout of a premium rate CSV.

use rust_decimal::Decimal;

/// A (total, salary) column pair whose totals should be twice the salary
/// share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryPair {
    /// Short name used in logs and errors.
    pub name: &'static str,
    pub total: usize,
    pub salary: usize,
}

/// Column positions and validation limits for one table format.
///
/// The default matches the tables published per prefecture: rank, label,
/// lower bound, separator, upper bound, then three (total, salary) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub rank: usize,
    pub label: usize,
    pub rank_min: usize,
    pub rank_max: usize,
    pub insurance_younger_total: usize,
    pub insurance_younger_salary: usize,
    pub insurance_elder_total: usize,
    pub insurance_elder_salary: usize,
    pub pension_total: usize,
    pub pension_salary: usize,
    /// Number of insurance ranks in a complete table.
    pub rank_count: u32,
    /// Maximum character width of a well-formed rank cell.
    pub max_rank_width: usize,
    /// Largest accepted mean of `|total - 2 * salary| / total`.
    pub salary_rate_tolerance: Decimal,
    /// Glyphs marking the "from ～ to" column between bracket bounds.
    pub range_separators: Vec<char>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            rank: 0,
            label: 1,
            rank_min: 2,
            rank_max: 4,
            insurance_younger_total: 5,
            insurance_younger_salary: 6,
            insurance_elder_total: 7,
            insurance_elder_salary: 8,
            pension_total: 9,
            pension_salary: 10,
            rank_count: 50,
            max_rank_width: 6,
            salary_rate_tolerance: Decimal::new(3, 2),
            range_separators: vec!['～', '〜'],
        }
    }
}

impl TableLayout {
    /// The three column pairs checked for salary-rate plausibility, in
    /// check order.
    pub fn salary_pairs(&self) -> [SalaryPair; 3] {
        [
            SalaryPair {
                name: "insurance_younger",
                total: self.insurance_younger_total,
                salary: self.insurance_younger_salary,
            },
            SalaryPair {
                name: "insurance_elder",
                total: self.insurance_elder_total,
                salary: self.insurance_elder_salary,
            },
            SalaryPair {
                name: "pension",
                total: self.pension_total,
                salary: self.pension_salary,
            },
        ]
    }

    /// Rank cell text of the first data row.
    pub fn first_rank_label(&self) -> String {
        "1".to_string()
    }

    /// Rank cell text of the last data row.
    pub fn last_rank_label(&self) -> String {
        self.rank_count.to_string()
    }

    /// Returns true if `ch` marks a bracket range.
    pub fn is_range_separator(&self, ch: char) -> bool {
        self.range_separators.contains(&ch)
    }
}
