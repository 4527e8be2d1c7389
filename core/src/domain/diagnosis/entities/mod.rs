pub mod analysis_record;
pub mod diagnosis;
pub mod errors;
pub mod outcome;

pub use analysis_record::*;
pub use diagnosis::*;
pub use errors::*;
pub use outcome::*;
