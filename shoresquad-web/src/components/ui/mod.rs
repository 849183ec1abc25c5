pub mod beach_map;
pub mod chat_widget;
pub mod cleanup_form;
pub mod cleanup_panel;
mod helpers;
pub mod impact_panel;
pub mod member_form;
pub mod squad_panel;
pub mod weather_panel;
