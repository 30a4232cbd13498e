pub mod components;
pub mod icons;
pub mod toast;
pub mod viewport;
