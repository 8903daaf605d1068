pub mod app;
pub mod sections;
pub mod theme;
