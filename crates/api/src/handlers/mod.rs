pub mod fallback;
pub mod save_date;
