pub mod new;
pub mod slots;
pub mod view;
