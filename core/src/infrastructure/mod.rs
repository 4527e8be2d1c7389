pub mod analysis;
pub mod db;
pub mod upstream;
