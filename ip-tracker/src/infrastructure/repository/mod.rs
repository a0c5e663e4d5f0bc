pub mod ipapi_repository;
