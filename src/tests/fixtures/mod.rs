pub mod app;
pub mod commands {
    pub mod clock_in;
    pub mod clock_out;
}
pub mod directory;
pub mod entries;
