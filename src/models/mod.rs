pub mod forecast;
pub mod open_meteo;
pub mod suitable_window;
