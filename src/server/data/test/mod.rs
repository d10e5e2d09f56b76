mod export_job;
mod session;
mod spot;
mod user;
