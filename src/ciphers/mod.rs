pub mod uint256;

pub use self::uint256::{ParseU256Error, U256};
