//! The classic sorting routines, written out by hand.
//!
//! # Purpose
//! None of these are meant to compete with [`slice::sort`]. They exist because writing them is
//! the best way to see why the quadratic ones are quadratic, and what shell and counting sort do
//! to get around that.
//!
//! # Time Complexity
//! For this analysis of time complexity, variables are defined as follows:
//! - `n`: The number of items in the slice.
//! - `k`: The difference between the largest and smallest value.
//!
//! | Function | Complexity |
//! |-|-|
//! | `bubble_sort` | `O(n²)`, `O(n)`* |
//! | `insertion_sort` | `O(n²)`, `O(n)`* |
//! | `selection_sort` | `O(n²)` |
//! | `shell_sort` | `O(n²)`, about `O(n^1.5)` in practice |
//! | `counting_sort` | `O(n+k)` |
//! | `binary_search` | `O(log n)` |
//!
//! \* For input that is already sorted.

mod counting;
mod quadratic;
mod search;
mod shell;


pub use counting::*;
pub use quadratic::*;
pub use search::*;
pub use shell::*;
