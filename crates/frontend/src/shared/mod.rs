pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod crud;
pub mod icons;
pub mod modal_frame;
pub mod notification;
pub mod page_frame;
pub mod theme;
