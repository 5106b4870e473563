mod save_date_repo;

pub use save_date_repo::SaveDateRepo;
