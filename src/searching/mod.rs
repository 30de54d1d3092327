pub mod binary_search;

pub use self::binary_search::binary_search;
