extern crate std;

mod locked;
