pub mod case;
pub mod gate;
pub mod observation;
pub mod risk;
pub mod visit;
