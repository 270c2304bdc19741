pub mod icons;
pub mod wall;

pub use wall::print_wall;
