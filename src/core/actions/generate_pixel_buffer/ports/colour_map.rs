use crate::core::data::colour::Colour;

pub trait ColourMap {
    fn map(&self, iterations: f64) -> Colour;

    fn display_name(&self) -> &str;
}
