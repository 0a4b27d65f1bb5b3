mod analysis;
mod catalog;
mod render;
