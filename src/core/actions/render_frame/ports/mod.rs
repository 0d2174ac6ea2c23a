pub mod pixel_engine;
