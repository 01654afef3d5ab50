extern crate rand;
extern crate strum;
extern crate uuid;

pub mod db;
pub mod items;
pub mod random;
pub mod registry;
pub mod test_utils;
