mod record;
mod source;
mod extract;

pub use record::*;
pub use source::*;
pub use extract::*;
