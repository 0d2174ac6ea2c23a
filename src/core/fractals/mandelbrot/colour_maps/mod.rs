pub mod blue_white_gradient;
pub mod factory;
pub mod fire_gradient;
