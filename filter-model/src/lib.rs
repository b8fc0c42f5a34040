mod area;
mod catalog;
mod filter;
mod image;
mod parameter;

pub use area::Area;
pub use catalog::FilterDef;
pub use catalog::ParameterDef;
pub use catalog::ParameterKindDef;
pub use filter::Filter;
pub use image::Image;
pub use parameter::Parameter;
pub use parameter::ParameterError;
pub use parameter::ParameterValue;
