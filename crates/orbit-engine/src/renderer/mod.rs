pub mod sdf_instance;
