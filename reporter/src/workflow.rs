//! Typed view of the benchmark workflow naming convention.
//!
//! Benchmark workflows are named `<prefix>-<chain>[-<workload>]`, for
//! example `bench-Ethereum-ERC20` or `bench-Polygon`. The prefix is ignored,
//! the chain names the system under benchmark, and the workload defaults to
//! the plain transfer benchmark when omitted.

use std::fmt;
use thiserror::Error;

/// Workload category exercised by a benchmark workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Simple,
    Erc20,
    Uniswap,
}

impl Category {
    /// Column order of the rendered report.
    pub const REPORT_ORDER: [Category; 3] = [Category::Simple, Category::Erc20, Category::Uniswap];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Simple => "Simple",
            Category::Erc20 => "ERC20",
            Category::Uniswap => "Uniswap",
        }
    }

    fn from_label(label: &str) -> Option<Category> {
        match label {
            "Simple" => Some(Category::Simple),
            "ERC20" => Some(Category::Erc20),
            "Uniswap" => Some(Category::Uniswap),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Workflow name '{name}' has no chain segment")]
    MissingChain { name: String },
    #[error("Workflow name '{name}' uses unrecognised workload category '{category}'")]
    UnknownCategory { name: String, category: String },
}

/// What a workflow benchmarks, parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDescriptor {
    pub chain: String,
    pub category: Category,
}

impl WorkflowDescriptor {
    /// Parse a workflow name. Segments are trimmed of surrounding
    /// whitespace; anything after the third segment is ignored.
    pub fn parse(name: &str) -> Result<WorkflowDescriptor, NameError> {
        let mut parts = name.split('-');
        let _prefix = parts.next();

        let chain = parts
            .next()
            .map(str::trim)
            .filter(|chain| !chain.is_empty())
            .ok_or_else(|| NameError::MissingChain {
                name: name.to_string(),
            })?;

        let category = match parts.next().map(str::trim) {
            None => Category::Simple,
            Some(label) => {
                Category::from_label(label).ok_or_else(|| NameError::UnknownCategory {
                    name: name.to_string(),
                    category: label.to_string(),
                })?
            }
        };

        Ok(WorkflowDescriptor {
            chain: chain.to_string(),
            category,
        })
    }
}
