use crate::metric::RunMetric;
use tabled::Tabled;

#[derive(Tabled)]
pub(crate) struct ChainRow {
    #[tabled(rename = "Chain")]
    pub chain: String,
    #[tabled(rename = "Simple")]
    pub simple: String,
    #[tabled(rename = "ERC20")]
    pub erc20: String,
    #[tabled(rename = "Uniswap")]
    pub uniswap: String,
}

pub(crate) fn metric_cell(metric: Option<RunMetric>) -> String {
    match metric {
        Some(metric) => format!("{}, {:.2}%", metric.best_tps, metric.gas_used * 100.0),
        None => String::new(),
    }
}
