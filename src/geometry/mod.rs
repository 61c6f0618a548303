pub mod line_segment;
pub mod rect;
pub mod site;
