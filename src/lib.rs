//! Tripboard library exports for testing

use clap::ValueEnum;

use crate::core::sort::SortType;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Sort modes accepted by `--sort`. Only the actionable ones can be a default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InitialSort {
    #[default]
    Day,
    Time,
    Price,
}

impl From<InitialSort> for SortType {
    fn from(sort: InitialSort) -> Self {
        match sort {
            InitialSort::Day => SortType::Day,
            InitialSort::Time => SortType::Time,
            InitialSort::Price => SortType::Price,
        }
    }
}
