//! Build-step commands run from the `storefront` binary.

pub mod export;

use crate::catalog::CategoryTable;
use crate::pages::static_paths;

/// Print the pre-renderable routes, one per line.
pub fn print_paths(categories: &CategoryTable) {
    for path in static_paths(categories) {
        println!("{path}");
    }
}
