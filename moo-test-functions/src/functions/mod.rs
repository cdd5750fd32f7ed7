//! Multi-objective benchmark function implementations.

pub mod schaffer_n1;
pub mod zdt1;
pub mod zdt2;
pub mod zdt3;
pub mod zdt4;
pub mod zdt6;

pub use schaffer_n1::schaffer_n1;
pub use zdt1::zdt1;
pub use zdt2::zdt2;
pub use zdt3::zdt3;
pub use zdt4::zdt4;
pub use zdt6::zdt6;
