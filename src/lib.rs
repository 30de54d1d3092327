//! Textbook algorithm demonstrations: bead sort, bubble sort (iterative and
//! recursive), binary search and a 256-bit unsigned integer container.
//!
//! ```
//! use abacus::sorting::bead_sort;
//!
//! let mut data = vec![5, 3, 1, 7, 4, 1, 1, 20];
//! bead_sort(&mut data).unwrap();
//! assert_eq!(data, vec![1, 1, 1, 3, 4, 5, 7, 20]);
//! ```

pub mod ciphers;
pub mod config;
pub mod demo;
pub mod options;
pub mod report;
pub mod searching;
pub mod sorting;
