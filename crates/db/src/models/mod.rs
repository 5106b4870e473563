pub mod save_date;
