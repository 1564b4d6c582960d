//! Accumulation and rendering of the benchmark report.

mod chain_table;

use crate::metric::RunMetric;
use crate::workflow::Category;
use chain_table::{ChainRow, metric_cell};
use std::collections::HashMap;
use tabled::settings::Style;
use tabled::Table;

/// Collected metrics keyed by (chain, workload category).
///
/// Chains keep the order in which they were first recorded so the report is
/// stable across runs against the same workflow list.
#[derive(Debug, Default)]
pub struct ReportTable {
    chains: Vec<String>,
    cells: HashMap<(String, Category), RunMetric>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome of one workflow. Last write wins per key; a `None`
    /// clears any earlier metric but still registers the chain, so its row
    /// renders with blank cells rather than disappearing.
    pub fn record(&mut self, chain: &str, category: Category, metric: Option<RunMetric>) {
        if !self.chains.iter().any(|known| known == chain) {
            self.chains.push(chain.to_string());
        }

        let key = (chain.to_string(), category);
        match metric {
            Some(metric) => {
                self.cells.insert(key, metric);
            }
            None => {
                self.cells.remove(&key);
            }
        }
    }

    pub fn get(&self, chain: &str, category: Category) -> Option<RunMetric> {
        self.cells.get(&(chain.to_string(), category)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Render the report with one row per chain and one column per workload
    /// category. Missing metrics render as empty cells.
    pub fn render(&self) -> String {
        let rows = self
            .chains
            .iter()
            .map(|chain| {
                let [simple, erc20, uniswap] =
                    Category::REPORT_ORDER.map(|category| metric_cell(self.get(chain, category)));
                ChainRow {
                    chain: chain.clone(),
                    simple,
                    erc20,
                    uniswap,
                }
            })
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::modern());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(best_tps: u64, gas_used: f64) -> Option<RunMetric> {
        Some(RunMetric { best_tps, gas_used })
    }

    #[test]
    fn record_then_get_returns_the_recorded_metric() {
        let mut table = ReportTable::new();
        table.record("Ethereum", Category::Erc20, metric(1523, 0.87));

        assert_eq!(table.get("Ethereum", Category::Erc20), metric(1523, 0.87));
        assert_eq!(table.get("Ethereum", Category::Simple), None);
    }

    #[test]
    fn recording_twice_keeps_the_second_value_only() {
        let mut table = ReportTable::new();
        table.record("Ethereum", Category::Simple, metric(100, 0.5));
        table.record("Ethereum", Category::Simple, metric(200, 0.6));
        assert_eq!(table.get("Ethereum", Category::Simple), metric(200, 0.6));

        table.record("Ethereum", Category::Simple, None);
        assert_eq!(table.get("Ethereum", Category::Simple), None);
    }

    #[test]
    fn column_order_is_fixed_regardless_of_insertion_order() {
        let mut table = ReportTable::new();
        table.record("Zg", Category::Uniswap, metric(3, 0.3));
        table.record("Zg", Category::Erc20, metric(2, 0.2));
        table.record("Zg", Category::Simple, metric(1, 0.1));

        let rendered = table.render();
        let header = rendered
            .lines()
            .find(|line| line.contains("Chain"))
            .expect("header row");

        let positions = ["Chain", "Simple", "ERC20", "Uniswap"]
            .map(|column| header.find(column).expect("column header"));
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rows_keep_first_encounter_order() {
        let mut table = ReportTable::new();
        table.record("Polygon", Category::Simple, metric(1, 0.1));
        table.record("Ethereum", Category::Simple, metric(2, 0.2));
        table.record("Polygon", Category::Erc20, metric(3, 0.3));

        let rendered = table.render();
        let polygon = rendered.find("Polygon").expect("Polygon row");
        let ethereum = rendered.find("Ethereum").expect("Ethereum row");
        assert!(polygon < ethereum);
    }

    #[test]
    fn metric_cells_scale_gas_to_a_percentage() {
        let mut table = ReportTable::new();
        table.record("Ethereum", Category::Erc20, metric(1523, 0.87));

        let rendered = table.render();
        assert!(rendered.contains("1523, 87.00%"));
    }

    #[test]
    fn missing_categories_render_as_blank_cells() {
        let mut table = ReportTable::new();
        table.record("Zg", Category::Simple, metric(410, 0.12));
        table.record("Zg", Category::Erc20, None);

        let rendered = table.render();
        let row = rendered
            .lines()
            .find(|line| line.contains("Zg"))
            .expect("Zg row");

        let cells = row
            .trim_matches('│')
            .split('│')
            .map(str::trim)
            .collect::<Vec<_>>();
        assert_eq!(cells, vec!["Zg", "410, 12.00%", "", ""]);
    }

    #[test]
    fn chain_recorded_with_no_metric_still_gets_a_row() {
        let mut table = ReportTable::new();
        table.record("Polygon", Category::Simple, None);

        assert!(!table.is_empty());
        assert!(table.render().contains("Polygon"));
    }
}
