pub mod academic;
pub mod project;
pub mod research;
pub mod testimonial;
