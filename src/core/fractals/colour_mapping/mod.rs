pub mod in_set_rule;
pub mod polynomial_palette;
