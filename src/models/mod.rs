pub mod analysis;
pub mod bioload;
pub mod lighting;
pub mod parameter;
pub mod tank;

pub use analysis::*;
pub use bioload::*;
pub use lighting::*;
pub use parameter::*;
pub use tank::*;
