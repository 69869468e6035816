pub mod app;
pub mod signals_ui;
pub mod table_ui;
pub mod util;
