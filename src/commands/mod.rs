mod copy;
mod rewrite;

pub use copy::copy;
pub use rewrite::rewrite;
