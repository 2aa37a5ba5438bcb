// Presentation of command results on the console.

pub mod render;
