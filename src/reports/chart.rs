//! Spending pie chart
//!
//! Segments and legend for the spending-by-category chart. Categories with no
//! spending are left out of both.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{CategoryId, Money};
use crate::storage::Storage;

use super::spending::{SpendingByCategory, SpendingReport};

/// Segments whose rounded share (in percent) is below this carry no label
pub const MIN_LABEL_PERCENT: f64 = 5.0;

/// Shown when no category has any spending
pub const EMPTY_CHART_MESSAGE: &str = "No spending data to display.";

/// One slice of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSegment {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub value: Money,
    /// Share of the chart total, 0 to 100
    pub share: f64,
}

impl ChartSegment {
    /// Whole-percent label such as "37%", hidden when it rounds below 5%
    pub fn label(&self) -> Option<String> {
        let rounded = self.share.round();
        if rounded < MIN_LABEL_PERCENT {
            return None;
        }
        Some(format!("{}%", rounded as i64))
    }
}

/// A legend line: category name and its color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Pie chart of spending by category
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpendingChart {
    pub segments: Vec<ChartSegment>,
    pub total: Money,
}

impl SpendingChart {
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let report = SpendingReport::generate(storage)?;
        Ok(Self::from_spending(&report.rows))
    }

    /// One segment per category with positive spending, in category order
    pub fn from_spending(rows: &[SpendingByCategory]) -> Self {
        let spending: Vec<_> = rows
            .iter()
            .filter(|row| row.total_spending.is_positive())
            .collect();
        let total: Money = spending.iter().map(|row| row.total_spending).sum();

        let segments = spending
            .into_iter()
            .map(|row| ChartSegment {
                category_id: row.category_id,
                name: row.name.clone(),
                color: row.color.clone(),
                value: row.total_spending,
                share: row.total_spending.percent_of(total),
            })
            .collect();

        Self { segments, total }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Legend entries, exactly one per segment
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.segments
            .iter()
            .map(|segment| LegendEntry {
                name: segment.name.clone(),
                color: segment.color.clone(),
            })
            .collect()
    }

    /// Format the chart as a legend with amounts and labels
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("{}\n", EMPTY_CHART_MESSAGE);
        }

        let name_width = self
            .segments
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        let mut output = String::new();
        output.push_str("Spending Breakdown\n");
        output.push_str(&"=".repeat(name_width + 40));
        output.push('\n');

        for segment in &self.segments {
            let label = segment.label().unwrap_or_default();
            output.push_str(&format!(
                "{:<width$}  {:>12}  {:>4}  {}\n",
                segment.name,
                segment.value.to_string(),
                label,
                segment.color,
                width = name_width
            ));
        }

        output.push_str(&"-".repeat(name_width + 40));
        output.push('\n');
        output.push_str(&format!(
            "{:<width$}  {:>12}\n",
            "Total",
            self.total.to_string(),
            width = name_width
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, dollars: i64) -> SpendingByCategory {
        SpendingByCategory {
            category_id: CategoryId::new(),
            name: name.to_string(),
            total_spending: Money::from_units(dollars),
            color: format!("color-{}", name),
            budget_limit: None,
        }
    }

    #[test]
    fn test_zero_spending_is_excluded() {
        let chart = SpendingChart::from_spending(&[row("A", 30), row("B", 0), row("C", 70)]);

        let names: Vec<_> = chart.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        let legend: Vec<_> = chart.legend().into_iter().map(|e| e.name).collect();
        assert_eq!(legend, vec!["A", "C"]);
        assert_eq!(chart.total, Money::from_units(100));
    }

    #[test]
    fn test_shares_and_labels() {
        let chart = SpendingChart::from_spending(&[row("Big", 96), row("Small", 4)]);

        assert!((chart.segments[0].share - 96.0).abs() < 1e-9);
        assert_eq!(chart.segments[0].label().as_deref(), Some("96%"));
        assert_eq!(chart.segments[1].label(), None);
    }

    #[test]
    fn test_label_at_threshold() {
        let chart = SpendingChart::from_spending(&[row("A", 95), row("B", 5)]);
        assert_eq!(chart.segments[1].label().as_deref(), Some("5%"));
    }

    #[test]
    fn test_label_uses_rounded_share() {
        let chart = SpendingChart::from_spending(&[row("Rent", 954), row("Snacks", 46)]);
        assert!((chart.segments[1].share - 4.6).abs() < 1e-9);
        assert_eq!(chart.segments[1].label().as_deref(), Some("5%"));

        let chart = SpendingChart::from_spending(&[row("Rent", 956), row("Snacks", 44)]);
        assert_eq!(chart.segments[1].label(), None);
    }

    #[test]
    fn test_legend_carries_colors() {
        let chart = SpendingChart::from_spending(&[row("Housing", 1275)]);
        assert_eq!(
            chart.legend(),
            vec![LegendEntry {
                name: "Housing".into(),
                color: "color-Housing".into()
            }]
        );
    }

    #[test]
    fn test_empty_chart() {
        let chart = SpendingChart::from_spending(&[row("A", 0)]);
        assert!(chart.is_empty());
        assert!(chart.legend().is_empty());
        assert_eq!(chart.format_terminal(), "No spending data to display.\n");
    }

    #[test]
    fn test_format_terminal() {
        let chart = SpendingChart::from_spending(&[row("Travel", 350), row("Gifts", 50)]);
        let output = chart.format_terminal();

        assert!(output.contains("Travel"));
        assert!(output.contains("88%"));
        assert!(output.contains("13%"));
        assert!(output.contains("$400.00"));
    }
}
